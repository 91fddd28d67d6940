//! `twtheme`: export design-tool styles as a Tailwind theme.

mod cli;
mod config;
mod output;

use std::process::ExitCode;

use anyhow::Context;
use console::style;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use twtheme::{build_rows, render_rows, StyleCatalog};

const DEFAULT_LOG_DIRECTIVE: &str = "twtheme=warn";

/// Builds the log filter from `RUST_LOG` (or the default directive when it is
/// unset or invalid), with `--log-level` layered on top.
fn build_filter(level: Option<&str>, env: Option<&str>) -> EnvFilter {
    let mut filter = env
        .and_then(|env| EnvFilter::try_new(env).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    if let Some(level) = level {
        match format!("twtheme={level}").parse::<Directive>() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("ignoring invalid log level {level:?}: {e}"),
        }
    }
    filter
}

fn init_logging(level: Option<&str>) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level, env.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &cli::Args) -> anyhow::Result<()> {
    let config = config::load(args.config.as_deref())?;
    let options = args.apply((&config.export).into());
    config::validate(&options)?;

    let catalog = if args.reads_stdin() {
        StyleCatalog::from_reader(std::io::stdin().lock()).context("reading catalog from stdin")?
    } else {
        StyleCatalog::from_path(&args.catalog)?
    };
    tracing::info!(
        paints = catalog.paint_styles.len(),
        texts = catalog.text_styles.len(),
        effects = catalog.effect_styles.len(),
        "catalog loaded"
    );

    let rows = build_rows(&catalog, &options);
    let theme = render_rows(&rows, &options)?;
    output::write_theme(&theme, args.output.as_deref())?;

    eprintln!(
        "{}",
        output::summary(rows.len(), options.format, args.output.as_deref())
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());
    tracing::debug!("twtheme v{} starting", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("error:").for_stderr().red().bold());
            ExitCode::FAILURE
        }
    }
}
