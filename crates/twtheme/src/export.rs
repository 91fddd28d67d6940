//! The export entry point: options in, theme text out.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ExportError, ParseOptionError};
use crate::format::ColorFormat;
use crate::row::ExportRow;
use crate::serialize::{to_css, to_nested_json};
use crate::source::{build_rows, StyleSource};

/// Base font size used when none is configured, in pixels.
pub const DEFAULT_BASE_FONT_SIZE: f64 = 16.0;

/// Which theme representation to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tailwind 4: an `@theme` block of CSS custom properties.
    #[default]
    Css,
    /// Tailwind 3: a config object grouped by kind, printed as JSON.
    Js,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Css => "css",
            OutputFormat::Js => "js",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ParseOptionError;

    /// Accepts the format names as well as the Tailwind version they target.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" | "v4" | "4" => Ok(OutputFormat::Css),
            "js" | "json" | "v3" | "3" => Ok(OutputFormat::Js),
            _ => Err(ParseOptionError::new("output format", s, "css, js, v4, v3")),
        }
    }
}

/// Settings for one export.
///
/// # Example
///
/// ```rust
/// use twtheme::{ColorFormat, ExportOptions, OutputFormat};
///
/// let options = ExportOptions::new()
///     .format(OutputFormat::Js)
///     .base_font_size(10.0)
///     .merge_nested_colors(true)
///     .color_format(ColorFormat::Hex);
///
/// assert_eq!(options.format, OutputFormat::Js);
/// assert!(options.merge_nested_colors);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub format: OutputFormat,
    /// Pixel size of `1rem`. Must be non-zero.
    pub base_font_size: f64,
    /// Nest color names on `-` (only meaningful for [`OutputFormat::Js`]).
    pub merge_nested_colors: bool,
    pub color_format: ColorFormat,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn base_font_size(mut self, base_font_size: f64) -> Self {
        self.base_font_size = base_font_size;
        self
    }

    pub fn merge_nested_colors(mut self, merge: bool) -> Self {
        self.merge_nested_colors = merge;
        self
    }

    pub fn color_format(mut self, color_format: ColorFormat) -> Self {
        self.color_format = color_format;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            base_font_size: DEFAULT_BASE_FONT_SIZE,
            merge_nested_colors: false,
            color_format: ColorFormat::default(),
        }
    }
}

/// Renders already-built rows in the configured format.
pub fn render_rows(rows: &[ExportRow], options: &ExportOptions) -> Result<String, ExportError> {
    debug!(format = %options.format, rows = rows.len(), "rendering theme");
    match options.format {
        OutputFormat::Css => Ok(to_css(rows)),
        OutputFormat::Js => Ok(to_nested_json(rows, options.merge_nested_colors)?),
    }
}

/// Extracts rows from `source` and renders them.
///
/// ```rust
/// use twtheme::{export, ExportOptions, StyleCatalog};
///
/// let catalog = StyleCatalog::from_json_str(r#"{"paintStyles": [{
///     "name": "Brand/Brand Primary",
///     "paints": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}, "opacity": 0.5}]
/// }]}"#).unwrap();
///
/// let css = export(&catalog, &ExportOptions::default()).unwrap();
/// assert_eq!(css, "@theme {\n  --color-brand-primary: rgba(255, 255, 255, 0.5);\n}");
/// ```
pub fn export<S: StyleSource + ?Sized>(
    source: &S,
    options: &ExportOptions,
) -> Result<String, ExportError> {
    let rows = build_rows(source, options);
    render_rows(&rows, options)
}
