//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ReportConfig;
use std::path::Path;

/// File name searched for in a directory.
pub const CONFIG_FILE_NAME: &str = "twr.toml";

/// Loads and validates a `twr.toml` configuration from a directory.
///
/// Reads `<dir>/twr.toml`, parses it, and validates its values.
pub fn load_config(dir: &Path) -> Result<ReportConfig, ConfigError> {
    load_config_file(&dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration from an explicit file path.
pub fn load_config_file(path: &Path) -> Result<ReportConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Like [`load_config`], but returns the defaults when `<dir>/twr.toml`
/// does not exist. A file that exists but fails to parse is still an error.
pub fn load_config_or_default(dir: &Path) -> Result<ReportConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(ReportConfig::default());
    }
    load_config_file(&config_path)
}

/// Parses and validates a `twr.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ReportConfig, ConfigError> {
    let config: ReportConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that heuristic values are usable.
fn validate_config(config: &ReportConfig) -> Result<(), ConfigError> {
    let parser = &config.parser;
    if parser.clock_lookahead == 0 {
        return Err(ConfigError::ValidationError(
            "parser.clock_lookahead must be at least 1".to_string(),
        ));
    }
    if parser.clock_cell_markers.iter().any(|m| m.is_empty()) {
        return Err(ConfigError::ValidationError(
            "parser.clock_cell_markers must not contain empty strings".to_string(),
        ));
    }
    if parser.listing_resource_tokens.iter().any(|t| t.is_empty()) {
        return Err(ConfigError::ValidationError(
            "parser.listing_resource_tokens must not contain empty strings".to_string(),
        ));
    }
    Ok(())
}
