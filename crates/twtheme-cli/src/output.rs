//! Writing the rendered theme and reporting what was written.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use console::style;
use twtheme::OutputFormat;

/// Writes the theme to `path`, or to stdout when no path is given.
pub fn write_theme(theme: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{theme}\n"))
            .with_context(|| format!("failed to write theme to {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{theme}").context("failed to write theme to stdout")
        }
    }
}

/// One-line summary, styled for stderr.
pub fn summary(rows: usize, format: OutputFormat, path: Option<&Path>) -> String {
    let target = path.map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
    format!(
        "{} {} rows as {} to {}",
        style("exported").for_stderr().green().bold(),
        rows,
        style(format).for_stderr().cyan(),
        target
    )
}
