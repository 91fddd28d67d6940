//! Drop shadows as `box-shadow` values.

use crate::format::color::{rgba_string, Rgba};
use crate::format::units::px_to_rem;

/// Assembles `"<x> <y> <blur> <spread> <rgba>"` with lengths in rem.
///
/// A missing `spread` is written as zero. The color's own alpha channel is
/// used as its opacity.
///
/// ```rust
/// use twtheme::format::{box_shadow, Rgba};
///
/// let shadow = box_shadow(0.0, 4.0, 8.0, None, Rgba::new(0.0, 0.0, 0.0, 0.25), 16.0);
/// assert_eq!(shadow, "0rem 0.25rem 0.5rem 0rem rgba(0, 0, 0, 0.25)");
/// ```
pub fn box_shadow(
    offset_x: f64,
    offset_y: f64,
    radius: f64,
    spread: Option<f64>,
    color: Rgba,
    base_px: f64,
) -> String {
    format!(
        "{} {} {} {} {}",
        px_to_rem(offset_x, base_px),
        px_to_rem(offset_y, base_px),
        px_to_rem(radius, base_px),
        px_to_rem(spread.unwrap_or(0.0), base_px),
        rgba_string(color.rgb(), color.a)
    )
}
