//! Style sources and export row extraction.
//!
//! This module provides:
//!
//! - [`StyleSource`]: read-only access to a document's paint, text and effect styles
//! - [`StyleCatalog`]: an in-memory source, deserializable from JSON
//! - [`build_rows`]: the extraction pass turning styles into [`ExportRow`]s
//!
//! [`ExportRow`]: crate::ExportRow

mod builder;
mod catalog;

pub use builder::build_rows;
pub use catalog::{
    Effect, EffectStyle, FontName, LineHeight, Paint, PaintStyle, StyleCatalog, TextStyle, Vector,
};

/// Read-only access to the styles defined in a design document.
///
/// Implementations hand out already-fetched records; extraction never
/// mutates or re-queries the source.
pub trait StyleSource {
    /// Fill styles, in document order.
    fn paint_styles(&self) -> &[PaintStyle];

    /// Text styles, in document order.
    fn text_styles(&self) -> &[TextStyle];

    /// Effect styles, in document order.
    fn effect_styles(&self) -> &[EffectStyle];
}
