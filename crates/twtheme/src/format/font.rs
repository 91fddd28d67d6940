//! Named font styles to numeric weights.

/// Weight used when a style name is not in [`FONT_WEIGHTS`].
pub const DEFAULT_FONT_WEIGHT: u32 = 100;

/// Style names as reported by the design tool, with their CSS weights.
pub const FONT_WEIGHTS: &[(&str, u32)] = &[
    ("Thin", 100),
    ("ExtraLight", 200),
    ("Light", 300),
    ("Regular", 400),
    ("Medium", 500),
    ("SemiBold", 600),
    ("Bold", 700),
    ("ExtraBold", 800),
    ("Black", 900),
];

/// Looks up the numeric weight for a font style name.
///
/// Matching is exact; unknown names fall back to [`DEFAULT_FONT_WEIGHT`].
pub fn font_weight(style_name: &str) -> u32 {
    FONT_WEIGHTS
        .iter()
        .find(|(name, _)| *name == style_name)
        .map_or(DEFAULT_FONT_WEIGHT, |&(_, weight)| weight)
}
