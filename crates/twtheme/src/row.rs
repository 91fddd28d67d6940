//! Export rows: the unit passed from style extraction to serialization.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::ParseOptionError;

/// The kind of value a row carries. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowKind {
    Color,
    FontFamily,
    FontSize,
    FontWeight,
    LineHeight,
    Shadow,
}

impl RowKind {
    /// Every kind, in declaration order.
    pub const ALL: [RowKind; 6] = [
        RowKind::Color,
        RowKind::FontFamily,
        RowKind::FontSize,
        RowKind::FontWeight,
        RowKind::LineHeight,
        RowKind::Shadow,
    ];

    /// The hyphenated tag, also used as the CSS custom-property prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            RowKind::Color => "color",
            RowKind::FontFamily => "font-family",
            RowKind::FontSize => "font-size",
            RowKind::FontWeight => "font-weight",
            RowKind::LineHeight => "line-height",
            RowKind::Shadow => "shadow",
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowKind {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RowKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                ParseOptionError::new(
                    "row kind",
                    s,
                    "color, font-family, font-size, font-weight, line-height, shadow",
                )
            })
    }
}

/// A row value: preformatted CSS text, or a bare number (font weights).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RowValue {
    Text(String),
    Number(u32),
}

impl RowValue {
    pub(crate) fn to_json(&self) -> Value {
        match self {
            RowValue::Text(text) => Value::String(text.clone()),
            RowValue::Number(number) => Value::from(*number),
        }
    }
}

impl fmt::Display for RowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowValue::Text(text) => f.write_str(text),
            RowValue::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<String> for RowValue {
    fn from(text: String) -> Self {
        RowValue::Text(text)
    }
}

impl From<&str> for RowValue {
    fn from(text: &str) -> Self {
        RowValue::Text(text.to_string())
    }
}

impl From<u32> for RowValue {
    fn from(number: u32) -> Self {
        RowValue::Number(number)
    }
}

/// A canonical `(name, value, kind)` triple ready for serialization.
///
/// `name` is expected to be already normalized; rows sharing a name and
/// kind are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub name: String,
    pub value: RowValue,
    #[serde(rename = "type")]
    pub kind: RowKind,
}

impl ExportRow {
    pub fn new(name: impl Into<String>, value: impl Into<RowValue>, kind: RowKind) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }
}
