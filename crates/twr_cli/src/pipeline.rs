//! Shared helpers for CLI commands.
//!
//! Contains the steps common to `summary`, `paths` and `at`: configuration
//! resolution, report loading and the small text formatting helpers.

use std::path::{Path, PathBuf};

use tracing::debug;
use twr_config::{OutputFormat, ReportConfig};
use twr_report::{ParseOptions, TimingPath, TimingReport};

use crate::{GlobalArgs, ReportFormat};

/// Resolves the configuration from global CLI args.
///
/// If `--config` is specified, that file must exist. Otherwise `twr.toml`
/// in the current directory is used when present, defaults when not.
pub fn resolve_config(global: &GlobalArgs) -> Result<ReportConfig, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let path = PathBuf::from(config_path);
        if !path.is_file() {
            return Err(format!("file not found: {}", path.display()).into());
        }
        debug!(path = %path.display(), "loading configuration");
        Ok(twr_config::load_config_file(&path)?)
    } else {
        Ok(twr_config::load_config_or_default(&std::env::current_dir()?)?)
    }
}

/// Reads a report file.
pub fn read_report(path: &Path) -> Result<String, String> {
    if !path.is_file() {
        return Err(format!("file not found: {}", path.display()));
    }
    std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
}

/// Reads and parses a report file.
pub fn load_report(path: &Path, options: &ParseOptions) -> Result<TimingReport, String> {
    let text = read_report(path)?;
    let report = twr_report::parse_with(&text, options);
    debug!(
        path = %path.display(),
        paths = report.summary.total_paths,
        "report loaded"
    );
    Ok(report)
}

/// Picks the output format: the CLI flag wins over `twr.toml`.
pub fn resolve_format(flag: Option<ReportFormat>, config: &ReportConfig) -> ReportFormat {
    flag.unwrap_or(match config.output.format {
        OutputFormat::Text => ReportFormat::Text,
        OutputFormat::Json => ReportFormat::Json,
    })
}

/// `VIOLATED` or `MET`, in red or green when `color` is set.
pub fn status_label(path: &TimingPath, color: bool) -> String {
    if path.failed {
        paint("VIOLATED", "31", color)
    } else {
        paint("MET", "32", color)
    }
}

/// Wraps `text` in an ANSI SGR sequence when `color` is set.
pub fn paint(text: &str, sgr: &str, color: bool) -> String {
    if color {
        format!("\x1b[{sgr}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Formats nanoseconds with three decimals, as the reports print them.
pub fn ns(value: f64) -> String {
    format!("{value:.3} ns")
}
