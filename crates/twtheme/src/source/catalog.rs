//! Style records and the JSON-backed [`StyleCatalog`].
//!
//! Field names follow the design tool's plugin API (`paintStyles`,
//! `fontName`, `lineHeight`, `DROP_SHADOW`, ...) so a catalog dumped from the
//! host document deserializes without translation. Paint and effect kinds
//! the exporter does not handle parse into catch-all variants instead of
//! failing.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::format::{Rgb, Rgba};
use crate::source::StyleSource;

/// A named fill style.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaintStyle {
    pub name: String,
    #[serde(default)]
    pub paints: Vec<Paint>,
}

/// One paint layer of a fill style.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid {
        color: Rgb,
        #[serde(default = "full_opacity")]
        opacity: f64,
    },
    /// Gradients, images, video and anything newer.
    #[serde(other)]
    Other,
}

/// A named text style.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub name: String,
    pub font_name: FontName,
    pub font_size: f64,
    #[serde(default)]
    pub line_height: LineHeight,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    Pixels {
        value: f64,
    },
    Percent {
        value: f64,
    },
    #[default]
    Auto,
    /// Any unit this exporter does not convert.
    #[serde(other)]
    Other,
}

/// A named effect style.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EffectStyle {
    pub name: String,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow {
        color: Rgba,
        offset: Vector,
        radius: f64,
        #[serde(default)]
        spread: Option<f64>,
    },
    /// Inner shadows and blurs.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

fn full_opacity() -> f64 {
    1.0
}

/// An in-memory snapshot of a document's styles.
///
/// # Example
///
/// ```rust
/// use twtheme::StyleCatalog;
///
/// let catalog = StyleCatalog::from_json_str(r#"{
///     "paintStyles": [{
///         "name": "Primary/Dark",
///         "paints": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0.5}}]
///     }]
/// }"#).unwrap();
///
/// assert_eq!(catalog.paint_styles.len(), 1);
/// assert!(catalog.text_styles.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleCatalog {
    pub paint_styles: Vec<PaintStyle>,
    pub text_styles: Vec<TextStyle>,
    pub effect_styles: Vec<EffectStyle>,
}

impl StyleCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a paint style, returning the catalog for chaining.
    pub fn paint(mut self, style: PaintStyle) -> Self {
        self.paint_styles.push(style);
        self
    }

    /// Adds a text style, returning the catalog for chaining.
    pub fn text(mut self, style: TextStyle) -> Self {
        self.text_styles.push(style);
        self
    }

    /// Adds an effect style, returning the catalog for chaining.
    pub fn effect(mut self, style: EffectStyle) -> Self {
        self.effect_styles.push(style);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads and parses a catalog file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn is_empty(&self) -> bool {
        self.paint_styles.is_empty() && self.text_styles.is_empty() && self.effect_styles.is_empty()
    }
}

impl StyleSource for StyleCatalog {
    fn paint_styles(&self) -> &[PaintStyle] {
        &self.paint_styles
    }

    fn text_styles(&self) -> &[TextStyle] {
        &self.text_styles
    }

    fn effect_styles(&self) -> &[EffectStyle] {
        &self.effect_styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solid_paint_defaults_opacity() {
        let catalog = StyleCatalog::from_json_str(
            r#"{"paintStyles": [{"name": "Red", "paints": [
                {"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0}, "blendMode": "NORMAL"}
            ]}]}"#,
        )
        .unwrap();

        assert_eq!(
            catalog.paint_styles[0].paints[0],
            Paint::Solid {
                color: Rgb::new(1.0, 0.0, 0.0),
                opacity: 1.0
            }
        );
    }

    #[test]
    fn test_parse_unknown_paint_as_other() {
        let catalog = StyleCatalog::from_json_str(
            r#"{"paintStyles": [{"name": "Fade", "paints": [
                {"type": "GRADIENT_LINEAR", "gradientStops": []}
            ]}]}"#,
        )
        .unwrap();

        assert_eq!(catalog.paint_styles[0].paints[0], Paint::Other);
    }

    #[test]
    fn test_parse_text_style() {
        let catalog = StyleCatalog::from_json_str(
            r#"{"textStyles": [{
                "name": "Heading/H1",
                "fontName": {"family": "Inter", "style": "Bold"},
                "fontSize": 32,
                "lineHeight": {"unit": "PIXELS", "value": 40}
            }, {
                "name": "Body",
                "fontName": {"family": "Inter", "style": "Regular"},
                "fontSize": 16,
                "lineHeight": {"unit": "AUTO"}
            }]}"#,
        )
        .unwrap();

        let heading = &catalog.text_styles[0];
        assert_eq!(heading.font_name.family, "Inter");
        assert_eq!(heading.font_size, 32.0);
        assert_eq!(heading.line_height, LineHeight::Pixels { value: 40.0 });
        assert_eq!(catalog.text_styles[1].line_height, LineHeight::Auto);
    }

    #[test]
    fn test_parse_unknown_line_height_unit() {
        let catalog = StyleCatalog::from_json_str(
            r#"{"textStyles": [{
                "name": "Caption",
                "fontName": {"family": "Inter", "style": "Regular"},
                "fontSize": 12,
                "lineHeight": {"unit": "EM", "value": 1.5}
            }]}"#,
        )
        .unwrap();

        assert_eq!(catalog.text_styles[0].line_height, LineHeight::Other);
    }

    #[test]
    fn test_parse_effects() {
        let catalog = StyleCatalog::from_json_str(
            r#"{"effectStyles": [{"name": "Shadow/Small", "effects": [
                {"type": "DROP_SHADOW", "color": {"r": 0, "g": 0, "b": 0, "a": 0.25},
                 "offset": {"x": 0, "y": 4}, "radius": 4},
                {"type": "LAYER_BLUR", "radius": 2}
            ]}]}"#,
        )
        .unwrap();

        let effects = &catalog.effect_styles[0].effects;
        assert_eq!(
            effects[0],
            Effect::DropShadow {
                color: Rgba::new(0.0, 0.0, 0.0, 0.25),
                offset: Vector { x: 0.0, y: 4.0 },
                radius: 4.0,
                spread: None,
            }
        );
        assert_eq!(effects[1], Effect::Other);
    }

    #[test]
    fn test_missing_collections_default_empty() {
        let catalog = StyleCatalog::from_json_str("{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = StyleCatalog::from_json_str("{\"paintStyles\": 3}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = StyleCatalog::from_path(Path::new("/nonexistent/styles.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("styles.json");
        std::fs::write(&path, r#"{"paintStyles": [{"name": "A", "paints": []}]}"#).unwrap();

        let catalog = StyleCatalog::from_path(&path).unwrap();
        assert_eq!(catalog.paint_styles[0].name, "A");
    }

    #[test]
    fn test_builder_chaining() {
        let catalog = StyleCatalog::new()
            .paint(PaintStyle {
                name: "A".into(),
                paints: vec![],
            })
            .effect(EffectStyle {
                name: "B".into(),
                effects: vec![],
            });
        assert_eq!(catalog.paint_styles().len(), 1);
        assert_eq!(catalog.effect_styles().len(), 1);
        assert!(catalog.text_styles().is_empty());
    }
}
