//! # twtheme - Tailwind themes from design-tool styles
//!
//! `twtheme` turns the color, text and effect styles of a design document
//! into theme output Tailwind understands: either a Tailwind 4 `@theme`
//! block of CSS custom properties, or a Tailwind 3 config object.
//!
//! ## Pipeline
//!
//! ```text
//! StyleSource (paint / text / effect styles)
//!     │
//!     ▼
//! build_rows:  normalize_name + format::* → Vec<ExportRow>
//!     │
//!     ▼
//! to_css | to_nested_json  → String
//! ```
//!
//! The interesting work happens in [`normalize_name`], which collapses
//! folder-style names such as `"Primary/Primary Dark"` into tokens like
//! `primary-dark`, and in the [`format`] functions, which produce exact CSS
//! values.
//!
//! ## Quick Start
//!
//! ```rust
//! use twtheme::{export, ExportOptions, OutputFormat, StyleCatalog};
//!
//! let catalog = StyleCatalog::from_json_str(r#"{
//!     "paintStyles": [
//!         {"name": "Primary/Primary Dark", "paints": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0}}]},
//!         {"name": "Primary/Primary Light", "paints": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}}]}
//!     ]
//! }"#).unwrap();
//!
//! let options = ExportOptions::new()
//!     .format(OutputFormat::Js)
//!     .merge_nested_colors(true);
//! let js = export(&catalog, &options).unwrap();
//!
//! assert!(js.contains("\"primary\": {"));
//! assert!(js.contains("\"dark\": \"rgba(0, 0, 0, 1)\""));
//! ```
//!
//! The document itself is reached through the [`StyleSource`] trait, so any
//! host can feed the exporter; [`StyleCatalog`] is the JSON-backed
//! implementation.

pub mod error;
mod export;
pub mod format;
mod name;
mod row;
pub mod serialize;
pub mod source;

pub use error::{CatalogError, ExportError, ParseOptionError};
pub use export::{export, render_rows, ExportOptions, OutputFormat, DEFAULT_BASE_FONT_SIZE};
pub use format::{ColorFormat, Rgb, Rgba};
pub use name::{font_family_name, normalize_name, HIERARCHY_SEPARATORS, STOP_WORDS};
pub use row::{ExportRow, RowKind, RowValue};
pub use serialize::{deep_merge, group_key, to_css, to_nested, to_nested_json};
pub use source::{build_rows, StyleCatalog, StyleSource};
