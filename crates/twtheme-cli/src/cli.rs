use std::path::{Path, PathBuf};

use clap::Parser;
use twtheme::{ColorFormat, ExportOptions, OutputFormat};

/// Export design-tool color, text and effect styles as a Tailwind theme.
#[derive(Parser, Debug)]
#[command(name = "twtheme", version, about)]
pub struct Args {
    /// Style catalog JSON file, or `-` to read from stdin.
    pub catalog: PathBuf,

    /// Output format: css (Tailwind 4 @theme) or js (Tailwind 3 config). Also accepts v4/v3.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Pixel size of 1rem used for font sizes, line heights and shadows.
    #[arg(short, long, value_name = "PX")]
    pub base_font_size: Option<f64>,

    /// Nest color names on `-` in js output (primary-dark → primary.dark).
    #[arg(short = 'n', long, overrides_with = "no_merge_nested_colors")]
    pub merge_nested_colors: bool,

    /// Keep color names flat even when the config file enables nesting.
    #[arg(long, overrides_with = "merge_nested_colors")]
    pub no_merge_nested_colors: bool,

    /// Color representation: rgba or hex.
    #[arg(long, value_name = "FORMAT")]
    pub color_format: Option<ColorFormat>,

    /// Write the theme to a file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file path override.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Layers flags given on the command line over configured options.
    pub fn apply(&self, mut options: ExportOptions) -> ExportOptions {
        if let Some(format) = self.format {
            options.format = format;
        }
        if let Some(base) = self.base_font_size {
            options.base_font_size = base;
        }
        if self.merge_nested_colors {
            options.merge_nested_colors = true;
        } else if self.no_merge_nested_colors {
            options.merge_nested_colors = false;
        }
        if let Some(color_format) = self.color_format {
            options.color_format = color_format;
        }
        options
    }

    /// Whether the catalog comes from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.catalog == Path::new("-")
    }
}

pub fn parse() -> Args {
    Args::parse()
}
