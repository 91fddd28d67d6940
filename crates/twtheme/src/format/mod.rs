//! Value formatters for exported theme values.
//!
//! Every formatter is a pure function producing a CSS-ready string (or, for
//! font weights, a number):
//!
//! - [`rgba_string`] / [`hex_string`]: colors from fractional channels
//! - [`px_to_rem`]: pixel sizes relative to a base font size
//! - [`font_weight`]: named font styles to numeric weights
//! - [`box_shadow`]: drop shadows as `box-shadow` values
//!
//! Fractional output is rounded to [`MAX_DECIMAL_PLACES`] and printed in its
//! shortest form, so `1.0` renders as `1` and `0.4500` as `0.45`.

mod color;
mod font;
mod shadow;
mod units;

pub use color::{hex_string, rgba_string, to_channel, ColorFormat, Rgb, Rgba};
pub use font::{font_weight, DEFAULT_FONT_WEIGHT, FONT_WEIGHTS};
pub use shadow::box_shadow;
pub use units::{format_number, px_to_rem, round_decimals, MAX_DECIMAL_PLACES, REM_SUFFIX};
