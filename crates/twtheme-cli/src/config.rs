//! TOML configuration: schema, loading and validation.
//!
//! ```toml
//! [export]
//! format = "css"
//! base_font_size = 16.0
//! merge_nested_colors = false
//! color_format = "rgba"
//! ```
//!
//! Every field is optional. The file is looked up in order: the `--config`
//! path, `./twtheme.toml`, then `<config dir>/twtheme/config.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};
use twtheme::{ColorFormat, ExportOptions, OutputFormat, DEFAULT_BASE_FONT_SIZE};

/// Config file name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "twtheme.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: OutputFormat,
    pub base_font_size: f64,
    pub merge_nested_colors: bool,
    pub color_format: ColorFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Css,
            base_font_size: DEFAULT_BASE_FONT_SIZE,
            merge_nested_colors: false,
            color_format: ColorFormat::Rgba,
        }
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        ExportOptions::new()
            .format(config.format)
            .base_font_size(config.base_font_size)
            .merge_nested_colors(config.merge_nested_colors)
            .color_format(config.color_format)
    }
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Resolve and load the config file.
///
/// An explicit path must exist. Otherwise the first existing candidate is
/// used, falling back to defaults when there is none.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    for candidate in candidate_paths() {
        if candidate.is_file() {
            return load_from_path(&candidate);
        }
    }

    debug!("no config file found, using defaults");
    Ok(Config::default())
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("twtheme").join("config.toml"));
    }
    paths
}

/// Check export options before running an export.
pub fn validate(options: &ExportOptions) -> Result<(), ConfigError> {
    let base = options.base_font_size;
    if !base.is_finite() || base <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "base_font_size must be a positive number, got {base}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_partial_toml_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("twtheme.toml");
        std::fs::write(
            &path,
            r#"
[export]
format = "js"
merge_nested_colors = true
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.export.format, OutputFormat::Js);
        assert!(config.export.merge_nested_colors);
        assert_eq!(config.export.base_font_size, 16.0);
        assert_eq!(config.export.color_format, ColorFormat::Rgba);
    }

    #[test]
    fn test_load_full_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[export]
format = "css"
base_font_size = 18.0
merge_nested_colors = false
color_format = "hex"
"#,
        )
        .unwrap();

        let options = ExportOptions::from(&load_from_path(&path).unwrap().export);
        assert_eq!(options.base_font_size, 18.0);
        assert_eq!(options.color_format, ColorFormat::Hex);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = load(Some(Path::new("/tmp/nonexistent_twtheme_config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("twtheme.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_rejects_unknown_format_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("twtheme.toml");
        std::fs::write(&path, "[export]\nformat = \"scss\"\n").unwrap();

        assert!(matches!(
            load_from_path(&path).unwrap_err(),
            ConfigError::ParseError(_)
        ));
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("twtheme.toml");
        std::fs::write(&path, "").unwrap();

        assert_eq!(load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_validate_base_font_size() {
        assert!(validate(&ExportOptions::default()).is_ok());
        for bad in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            let options = ExportOptions::default().base_font_size(bad);
            assert!(matches!(
                validate(&options),
                Err(ConfigError::ValidationError(_))
            ));
        }
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("bad".into());
        assert_eq!(err.to_string(), "config validation error: bad");
    }
}
