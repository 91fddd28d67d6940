//! Color conversion from fractional channels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseOptionError;
use crate::format::units::format_number;

/// An RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// An RGB color carrying its own alpha channel, as found on effects.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// The color without its alpha channel.
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// Scales a fractional channel to `0..=255`, rounding to the nearest integer.
///
/// Out-of-range input saturates.
pub fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Formats a color as `rgba(R, G, B, A)`.
///
/// ```rust
/// use twtheme::format::{rgba_string, Rgb};
///
/// assert_eq!(rgba_string(Rgb::new(0.25, 0.5, 0.75), 1.0), "rgba(64, 128, 191, 1)");
/// ```
pub fn rgba_string(color: Rgb, opacity: f64) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        to_channel(color.r),
        to_channel(color.g),
        to_channel(color.b),
        format_number(opacity)
    )
}

/// Formats a color as `#rrggbbaa`, with the opacity as the alpha byte.
///
/// ```rust
/// use twtheme::format::{hex_string, Rgb};
///
/// assert_eq!(hex_string(Rgb::new(0.25, 0.5, 0.75), 0.45), "#4080bf73");
/// ```
pub fn hex_string(color: Rgb, opacity: f64) -> String {
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        to_channel(color.r),
        to_channel(color.g),
        to_channel(color.b),
        to_channel(opacity)
    )
}

/// How solid paint colors are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `rgba(R, G, B, A)`
    #[default]
    Rgba,
    /// `#rrggbbaa`
    Hex,
}

impl ColorFormat {
    pub fn format(self, color: Rgb, opacity: f64) -> String {
        match self {
            ColorFormat::Rgba => rgba_string(color, opacity),
            ColorFormat::Hex => hex_string(color, opacity),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Rgba => "rgba",
            ColorFormat::Hex => "hex",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgba" => Ok(ColorFormat::Rgba),
            "hex" => Ok(ColorFormat::Hex),
            _ => Err(ParseOptionError::new("color format", s, "rgba, hex")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_black_and_white() {
        assert_eq!(rgba_string(Rgb::new(0.0, 0.0, 0.0), 1.0), "rgba(0, 0, 0, 1)");
        assert_eq!(
            rgba_string(Rgb::new(1.0, 1.0, 1.0), 1.0),
            "rgba(255, 255, 255, 1)"
        );
    }

    #[test]
    fn test_rgba_middling_values_round_half_up() {
        assert_eq!(
            rgba_string(Rgb::new(0.25, 0.5, 0.75), 1.0),
            "rgba(64, 128, 191, 1)"
        );
    }

    #[test]
    fn test_rgba_passes_opacity_along() {
        assert_eq!(
            rgba_string(Rgb::new(1.0, 1.0, 1.0), 0.45),
            "rgba(255, 255, 255, 0.45)"
        );
        assert_eq!(
            rgba_string(Rgb::new(1.0, 1.0, 1.0), 0.123456),
            "rgba(255, 255, 255, 0.1235)"
        );
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex_string(Rgb::new(0.0, 0.0, 0.0), 1.0), "#000000ff");
        assert_eq!(hex_string(Rgb::new(1.0, 1.0, 1.0), 1.0), "#ffffffff");
        assert_eq!(hex_string(Rgb::new(0.25, 0.5, 0.75), 0.45), "#4080bf73");
    }

    #[test]
    fn test_to_channel_saturates() {
        assert_eq!(to_channel(1.5), 255);
        assert_eq!(to_channel(-0.2), 0);
    }

    #[test]
    fn test_color_format_dispatch() {
        let color = Rgb::new(1.0, 0.0, 0.0);
        assert_eq!(ColorFormat::Rgba.format(color, 0.5), "rgba(255, 0, 0, 0.5)");
        assert_eq!(ColorFormat::Hex.format(color, 0.5), "#ff000080");
    }

    #[test]
    fn test_color_format_from_str() {
        assert_eq!("HEX".parse::<ColorFormat>(), Ok(ColorFormat::Hex));
        assert_eq!("rgba".parse::<ColorFormat>(), Ok(ColorFormat::Rgba));
        assert!("hsl".parse::<ColorFormat>().is_err());
    }
}
