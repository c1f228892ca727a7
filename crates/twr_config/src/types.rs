//! Configuration types deserialized from `twr.toml`.

use serde::Deserialize;
use twr_report::options::{
    DEFAULT_CLOCK_CELL_MARKERS, DEFAULT_CLOCK_LOOKAHEAD, DEFAULT_LISTING_RESOURCE_TOKENS,
};
use twr_report::ParseOptions;

/// The top-level configuration parsed from `twr.toml`.
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReportConfig {
    /// Parser heuristics.
    #[serde(default)]
    pub parser: ParserConfig,
    /// CLI output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Heuristics of the report parser.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParserConfig {
    /// Lines scanned after a clock listing header.
    #[serde(default = "default_clock_lookahead")]
    pub clock_lookahead: usize,
    /// Cell-type substrings that mark a data path hop as a clock hop.
    #[serde(default = "default_clock_cell_markers")]
    pub clock_cell_markers: Vec<String>,
    /// Resource column titles that identify a listing header.
    #[serde(default = "default_listing_resource_tokens")]
    pub listing_resource_tokens: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            clock_lookahead: default_clock_lookahead(),
            clock_cell_markers: default_clock_cell_markers(),
            listing_resource_tokens: default_listing_resource_tokens(),
        }
    }
}

impl ParserConfig {
    /// Converts the section into the options taken by [`twr_report::parse_with`].
    pub fn to_parse_options(&self) -> ParseOptions {
        ParseOptions {
            clock_lookahead: self.clock_lookahead,
            clock_cell_markers: self.clock_cell_markers.clone(),
            listing_resource_tokens: self.listing_resource_tokens.clone(),
        }
    }
}

fn default_clock_lookahead() -> usize {
    DEFAULT_CLOCK_LOOKAHEAD
}

fn default_clock_cell_markers() -> Vec<String> {
    DEFAULT_CLOCK_CELL_MARKERS.iter().map(|m| m.to_string()).collect()
}

fn default_listing_resource_tokens() -> Vec<String> {
    DEFAULT_LISTING_RESOURCE_TOKENS
        .iter()
        .map(|t| t.to_string())
        .collect()
}

/// CLI output settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputConfig {
    /// Rendering of `twr paths` and `twr at`.
    #[serde(default)]
    pub format: OutputFormat,
    /// Number of path elements listed by `twr at`.
    #[serde(default = "default_preview_elements")]
    pub preview_elements: usize,
    /// Whether `twr summary` exits non-zero when any path failed.
    #[serde(default = "default_true")]
    pub fail_on_violation: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            preview_elements: default_preview_elements(),
            fail_on_violation: true,
        }
    }
}

fn default_preview_elements() -> usize {
    5
}

fn default_true() -> bool {
    true
}

/// Rendering of command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// The serialized report model.
    Json,
}
