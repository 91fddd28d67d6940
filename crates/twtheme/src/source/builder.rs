//! Extraction of export rows from a [`StyleSource`].

use tracing::{debug, trace};

use crate::export::ExportOptions;
use crate::format::{box_shadow, font_weight, px_to_rem};
use crate::name::{font_family_name, normalize_name};
use crate::row::{ExportRow, RowKind};
use crate::source::{Effect, EffectStyle, LineHeight, Paint, PaintStyle, StyleSource, TextStyle};

/// Turns every eligible style of `source` into export rows.
///
/// Rows come out in this order:
///
/// 1. one `color` row per paint style whose first paint is solid
/// 2. per text style: `font-size`, `font-weight`, and `line-height` when
///    the line height is in pixels
/// 3. one `font-family` row per distinct family, in first-seen order
/// 4. one `shadow` row per drop-shadow effect
///
/// Everything else (gradients, image fills, blurs, inner shadows, relative
/// line heights) is skipped.
///
/// # Example
///
/// ```rust
/// use twtheme::{build_rows, ExportOptions, RowKind, StyleCatalog};
///
/// let catalog = StyleCatalog::from_json_str(r#"{"textStyles": [{
///     "name": "Body/Body Large",
///     "fontName": {"family": "Open Sans", "style": "Medium"},
///     "fontSize": 18,
///     "lineHeight": {"unit": "PIXELS", "value": 28}
/// }]}"#).unwrap();
///
/// let rows = build_rows(&catalog, &ExportOptions::default());
/// let kinds: Vec<_> = rows.iter().map(|row| row.kind).collect();
/// assert_eq!(
///     kinds,
///     [RowKind::FontSize, RowKind::FontWeight, RowKind::LineHeight, RowKind::FontFamily]
/// );
/// assert_eq!(rows[0].name, "body-large");
/// assert_eq!(rows[3].name, "open-sans");
/// ```
pub fn build_rows<S: StyleSource + ?Sized>(source: &S, options: &ExportOptions) -> Vec<ExportRow> {
    let mut rows = Vec::new();

    push_color_rows(source.paint_styles(), options, &mut rows);
    let families = push_text_rows(source.text_styles(), options, &mut rows);
    for family in families {
        rows.push(ExportRow::new(
            font_family_name(&family),
            family,
            RowKind::FontFamily,
        ));
    }
    push_shadow_rows(source.effect_styles(), options, &mut rows);

    debug!(rows = rows.len(), "built export rows");
    for row in &rows {
        trace!(kind = %row.kind, name = %row.name, value = %row.value, "export row");
    }
    rows
}

fn push_color_rows(styles: &[PaintStyle], options: &ExportOptions, rows: &mut Vec<ExportRow>) {
    for style in styles {
        match style.paints.first() {
            Some(Paint::Solid { color, opacity }) => rows.push(ExportRow::new(
                normalize_name(&style.name, Some(RowKind::Color.as_str())),
                options.color_format.format(*color, *opacity),
                RowKind::Color,
            )),
            Some(Paint::Other) => debug!(style = %style.name, "skipping non-solid paint style"),
            None => debug!(style = %style.name, "skipping paint style without paints"),
        }
    }
}

/// Pushes the size, weight and line-height rows, returning the font families seen.
fn push_text_rows(
    styles: &[TextStyle],
    options: &ExportOptions,
    rows: &mut Vec<ExportRow>,
) -> Vec<String> {
    let mut families: Vec<String> = Vec::new();

    for style in styles {
        if !families.contains(&style.font_name.family) {
            families.push(style.font_name.family.clone());
        }

        let name = normalize_name(&style.name, None);
        rows.push(ExportRow::new(
            name.clone(),
            px_to_rem(style.font_size, options.base_font_size),
            RowKind::FontSize,
        ));
        rows.push(ExportRow::new(
            name.clone(),
            font_weight(&style.font_name.style),
            RowKind::FontWeight,
        ));

        match style.line_height {
            LineHeight::Pixels { value } => rows.push(ExportRow::new(
                name,
                px_to_rem(value, options.base_font_size),
                RowKind::LineHeight,
            )),
            LineHeight::Percent { .. } | LineHeight::Auto | LineHeight::Other => {
                debug!(style = %style.name, "skipping line height not given in pixels")
            }
        }
    }

    families
}

fn push_shadow_rows(styles: &[EffectStyle], options: &ExportOptions, rows: &mut Vec<ExportRow>) {
    for style in styles {
        for effect in &style.effects {
            match effect {
                Effect::DropShadow {
                    color,
                    offset,
                    radius,
                    spread,
                } => rows.push(ExportRow::new(
                    normalize_name(&style.name, Some(RowKind::Shadow.as_str())),
                    box_shadow(
                        offset.x,
                        offset.y,
                        *radius,
                        *spread,
                        *color,
                        options.base_font_size,
                    ),
                    RowKind::Shadow,
                )),
                Effect::Other => debug!(style = %style.name, "skipping non drop-shadow effect"),
            }
        }
    }
}
