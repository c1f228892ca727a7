//! Line classification.
//!
//! Every report line is mapped to a [`Line`] variant before the state
//! machine in [`parser`](crate::parser) looks at it. Classification is
//! independent of the parser state; what a `Text` line means (header field,
//! clock hop, data hop) is decided by the caller from the current section.

use std::sync::LazyLock;

use regex::Regex;

use crate::options::ParseOptions;

static SLACK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Slack\s+\((violated|met|setup\s+path|hold\s+path)\)\s*:\s*(-?\d+\.?\d*)\s*ns")
        .unwrap()
});

static SOURCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Source:\s+(.+?)(?:\s+\(|$)").unwrap());

static DESTINATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Destination:\s+(.+?)(?:\s+\(|$)").unwrap());

static REQUIREMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Requirement:\s*(-?\d+\.?\d*)\s*ns").unwrap());

static DATA_PATH_DELAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Data Path Delay:\s*(\d+\.?\d*)\s*ns").unwrap());

static CLOCKED_BY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)clocked by\s+(.+?)(?:\s+\{|$)").unwrap());

static CLOCK_SKEW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Clock Path Skew:\s*(-?\d+\.?\d*)\s*ns").unwrap());

static UNCERTAINTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Clock Uncertainty:\s*(\d+\.?\d*)\s*ns").unwrap());

static CLOCK_EDGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*\(clock .+ rise edge\)").unwrap());

// Generic "location + identifier + (" prefix of a data path hop.
static DATA_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\S+\s+[\w_]+\s+\(").unwrap());

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+\.?\d+").unwrap());

/// Verdict printed in a slack header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlackStatus {
    /// `Slack (VIOLATED)`.
    Violated,
    /// `Slack (MET)`.
    Met,
    /// `Slack (setup path)`, ISE style.
    Setup,
    /// `Slack (hold path)`, ISE style.
    Hold,
}

/// A parsed `Slack (...): <n> ns` line. Each one opens a new path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlackHeader {
    /// Verdict in parentheses.
    pub status: SlackStatus,
    /// Slack value in nanoseconds.
    pub slack: f64,
}

impl SlackHeader {
    /// A `VIOLATED` header fails regardless of the printed sign.
    pub fn failed(&self) -> bool {
        self.status == SlackStatus::Violated || self.slack < 0.0
    }
}

/// Structural kind of one report line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line<'a> {
    /// Start of a new path.
    Slack(SlackHeader),
    /// Column header of a detailed listing (`Location  Delay type ...`).
    ListingHeader,
    /// `(clock <name> rise edge)`: start of a clock tree listing.
    ClockEdge,
    /// A `---` rule between listing sections.
    Divider,
    /// Whitespace only.
    Blank,
    /// Anything else.
    Text(&'a str),
}

/// Classifies a single line.
pub fn classify<'a>(line: &'a str, options: &ParseOptions) -> Line<'a> {
    if let Some(header) = slack_header(line) {
        return Line::Slack(header);
    }
    if line.trim().is_empty() {
        return Line::Blank;
    }
    if is_listing_header(line, options) {
        return Line::ListingHeader;
    }
    if is_clock_edge(line) {
        return Line::ClockEdge;
    }
    if is_divider(line) {
        return Line::Divider;
    }
    Line::Text(line)
}

fn slack_header(line: &str) -> Option<SlackHeader> {
    let caps = SLACK_RE.captures(line)?;
    let verdict = caps[1].to_ascii_lowercase();
    let status = if verdict == "violated" {
        SlackStatus::Violated
    } else if verdict == "met" {
        SlackStatus::Met
    } else if verdict.starts_with("setup") {
        SlackStatus::Setup
    } else {
        SlackStatus::Hold
    };
    let slack = caps[2].parse().ok()?;
    Some(SlackHeader { status, slack })
}

fn is_listing_header(line: &str, options: &ParseOptions) -> bool {
    line.contains("Location")
        && line.contains("Delay type")
        && options
            .listing_resource_tokens
            .iter()
            .any(|token| line.contains(token.as_str()))
}

/// Returns `true` for a `(clock <name> rise edge)` header.
pub fn is_clock_edge(line: &str) -> bool {
    CLOCK_EDGE_RE.is_match(line)
}

/// Returns `true` for a `---` rule.
pub fn is_divider(line: &str) -> bool {
    line.contains("---")
}

/// Returns `true` if the line starts like a data path hop.
pub fn has_data_shape(line: &str) -> bool {
    DATA_SHAPE_RE.is_match(line)
}

/// Returns `true` for the per-path trailer that prints the final slack.
pub fn is_slack_trailer(line: &str) -> bool {
    line.contains("slack") && NUMBER_RE.is_match(line)
}

/// Reduces a hierarchical name to its last `/` segment.
///
/// For example, `top/inst/reg_q` -> `reg_q`.
pub fn leaf_name(full: &str) -> &str {
    match full.rsplit_once('/') {
        Some((_, leaf)) if !leaf.is_empty() => leaf,
        _ => full,
    }
}

/// Path header fields found on a single line.
///
/// One line may carry more than one field: a Vivado `Source:` line also
/// names its clock (`... clocked by clk {rise@0.000ns ...}`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderFields<'a> {
    /// `Source:` endpoint, normalized.
    pub source: Option<&'a str>,
    /// `Destination:` endpoint, normalized.
    pub destination: Option<&'a str>,
    /// `Requirement:` value.
    pub requirement: Option<f64>,
    /// `Data Path Delay:` value as printed.
    pub data_path_delay: Option<f64>,
    /// Clock name from a `clocked by <name>` phrase, normalized.
    pub clocked_by: Option<&'a str>,
    /// `Clock Path Skew:` value.
    pub clock_skew: Option<f64>,
    /// `Clock Uncertainty:` value.
    pub uncertainty: Option<f64>,
}

impl<'a> HeaderFields<'a> {
    /// Extracts every header field present on `line`.
    pub fn scan(line: &'a str) -> Self {
        Self {
            source: capture_name(&SOURCE_RE, line),
            destination: capture_name(&DESTINATION_RE, line),
            requirement: capture_ns(&REQUIREMENT_RE, line),
            data_path_delay: capture_ns(&DATA_PATH_DELAY_RE, line),
            clocked_by: capture_name(&CLOCKED_BY_RE, line),
            clock_skew: capture_ns(&CLOCK_SKEW_RE, line),
            uncertainty: capture_ns(&UNCERTAINTY_RE, line),
        }
    }

    /// Returns `true` if no field was found.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn capture_name<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    let full = re.captures(line)?.get(1)?.as_str().trim();
    if full.is_empty() {
        return None;
    }
    Some(leaf_name(full))
}

fn capture_ns(re: &Regex, line: &str) -> Option<f64> {
    re.captures(line)?.get(1)?.as_str().parse().ok()
}
