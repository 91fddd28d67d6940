//! Flat CSS custom-property output.

use crate::row::{ExportRow, RowKind};

/// Text placed between two declarations.
pub const DECLARATION_SEPARATOR: &str = ";\n\t";

/// Renders rows as an `@theme` block, one `--<kind>-<name>: <value>`
/// declaration per row in input order.
///
/// Font families are quoted. Rows are not deduplicated. The last
/// declaration is terminated like the others, so an empty row list still
/// produces a lone `;`.
///
/// ```rust
/// use twtheme::{to_css, ExportRow, RowKind};
///
/// let rows = [
///     ExportRow::new("primary", "rgba(0, 0, 0, 1)", RowKind::Color),
///     ExportRow::new("inter", "Inter", RowKind::FontFamily),
/// ];
/// assert_eq!(
///     to_css(&rows),
///     "@theme {\n  --color-primary: rgba(0, 0, 0, 1);\n\t--font-family-inter: \"Inter\";\n}"
/// );
/// ```
pub fn to_css(rows: &[ExportRow]) -> String {
    let declarations: Vec<String> = rows.iter().map(declaration).collect();
    format!(
        "@theme {{\n  {};\n}}",
        declarations.join(DECLARATION_SEPARATOR)
    )
}

fn declaration(row: &ExportRow) -> String {
    match row.kind {
        RowKind::FontFamily => format!("--{}-{}: \"{}\"", row.kind, row.name, row.value),
        _ => format!("--{}-{}: {}", row.kind, row.name, row.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rows() {
        assert_eq!(to_css(&[]), "@theme {\n  ;\n}");
    }

    #[test]
    fn test_single_row() {
        let rows = [ExportRow::new("body", "1rem", RowKind::FontSize)];
        assert_eq!(to_css(&rows), "@theme {\n  --font-size-body: 1rem;\n}");
    }

    #[test]
    fn test_numbers_are_unquoted() {
        let rows = [ExportRow::new("bold", 700u32, RowKind::FontWeight)];
        assert!(to_css(&rows).contains("--font-weight-bold: 700;"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let rows = [
            ExportRow::new("card", "0rem 0rem 0rem 0rem rgba(0, 0, 0, 1)", RowKind::Shadow),
            ExportRow::new("card", "0rem 1rem 0rem 0rem rgba(0, 0, 0, 1)", RowKind::Shadow),
        ];
        let css = to_css(&rows);
        assert_eq!(css.matches("--shadow-card:").count(), 2);
        assert!(css.starts_with("@theme {"));
        assert!(css.ends_with('}'));
    }

    #[test]
    fn test_one_line_per_row() {
        let rows: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|name| ExportRow::new(*name, "1rem", RowKind::LineHeight))
            .collect();
        let css = to_css(&rows);
        let declarations = css.lines().filter(|line| line.contains("--line-height-")).count();
        assert_eq!(declarations, 3);
    }
}
