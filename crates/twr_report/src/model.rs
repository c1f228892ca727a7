//! Timing report data model.
//!
//! These types are produced by [`parse`](crate::parse) and are plain value
//! objects afterwards: a report is built once per parse call and never
//! mutated by the crate. Field names serialize in camelCase so JSON output
//! matches what editor-side consumers read (`pathElements`, `delayType`, ...).

use serde::{Deserialize, Serialize};

/// The parsed form of one timing report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingReport {
    /// Timing paths in the order they appear in the report.
    pub paths: Vec<TimingPath>,
    /// Constraint-level aggregation. Never populated by the parser.
    pub constraints: Vec<Constraint>,
    /// Totals over [`paths`](Self::paths).
    pub summary: Summary,
}

impl TimingReport {
    /// Builds a report from finalized paths, deriving the summary.
    pub fn from_paths(paths: Vec<TimingPath>) -> Self {
        let summary = Summary::of(&paths);
        Self {
            paths,
            constraints: Vec::new(),
            summary,
        }
    }

    /// Returns the first path whose line range contains `line` (0-based).
    pub fn path_at_line(&self, line: usize) -> Option<&TimingPath> {
        self.paths.iter().find(|p| p.contains_line(line))
    }

    /// Iterates over the paths that failed timing.
    pub fn failed_paths(&self) -> impl Iterator<Item = &TimingPath> {
        self.paths.iter().filter(|p| p.failed)
    }

    /// Returns the smallest slack over all paths, or `None` for an empty report.
    pub fn worst_slack(&self) -> Option<f64> {
        self.paths.iter().map(|p| p.slack).reduce(f64::min)
    }
}

/// One timing-checked path between a launch point and a capture point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingPath {
    /// Synthetic identifier `path_<n>`, numbered in discovery order.
    pub id: String,
    /// Launch endpoint, last `/` segment of the printed name.
    pub source: String,
    /// Capture endpoint, last `/` segment of the printed name.
    pub destination: String,
    /// Slack in nanoseconds; negative means a violation.
    pub slack: f64,
    /// Requirement in nanoseconds, 0 when the report prints none.
    pub requirement: f64,
    /// Sum of [`path_elements`](Self::path_elements) delays in nanoseconds.
    pub delay: f64,
    /// Whether the path violates timing.
    pub failed: bool,
    /// Launch-to-capture data path hops.
    pub path_elements: Vec<PathElement>,
    /// Clock tree hops driving the launch register.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_clock_elements: Option<Vec<PathElement>>,
    /// Clock tree hops driving the capture register.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_clock_elements: Option<Vec<PathElement>>,
    /// Clock names, skew and uncertainty printed in the path header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_path: Option<ClockPathInfo>,
    /// First report line (0-based) belonging to this path.
    pub start_line: usize,
    /// Last report line (0-based) belonging to this path.
    pub end_line: usize,
}

impl TimingPath {
    /// Returns `true` if `line` falls inside `[start_line, end_line]`.
    pub fn contains_line(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    /// Totals the data path delay per element kind.
    pub fn delay_breakdown(&self) -> DelayBreakdown {
        let mut breakdown = DelayBreakdown::default();
        for element in &self.path_elements {
            let bucket = match element.kind {
                ElementKind::Logic => &mut breakdown.logic,
                ElementKind::Net => &mut breakdown.net,
                ElementKind::Clock => &mut breakdown.clock,
            };
            bucket.count += 1;
            bucket.delay += element.delay;
        }
        breakdown
    }
}

/// Classification of a path hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// A logic cell (LUT, flip-flop, carry chain, ...).
    Logic,
    /// A routed interconnect.
    Net,
    /// A clock buffer, PLL/MMCM or any hop of a clock tree listing.
    Clock,
}

/// One hop along a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathElement {
    /// Hop classification.
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Net name for nets; downstream resource (or cell type) otherwise.
    pub name: String,
    /// Incremental delay contributed by this hop, in nanoseconds.
    pub delay: f64,
    /// Placement token such as `SLICE_X9Y337`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Timing arc (`Prop_lut6_I0_O`) or `net <fanout>` descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_type: Option<String>,
    /// Raw cell type or resource token as printed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

/// Clock information from a path header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockPathInfo {
    /// Launch clock name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_clock: Option<String>,
    /// Capture clock name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_clock: Option<String>,
    /// Clock path skew in nanoseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_skew: Option<f64>,
    /// Clock uncertainty in nanoseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<f64>,
}

/// Report-wide totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of paths in the report.
    pub total_paths: usize,
    /// Number of paths with `failed == true`.
    pub failed_paths: usize,
    /// The first failed path in report order (not the worst slack).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_path: Option<TimingPath>,
}

impl Summary {
    /// Derives the summary for a sequence of finalized paths.
    pub fn of(paths: &[TimingPath]) -> Self {
        Self {
            total_paths: paths.len(),
            failed_paths: paths.iter().filter(|p| p.failed).count(),
            critical_path: paths.iter().find(|p| p.failed).cloned(),
        }
    }
}

/// Constraint-level aggregation, reserved for future use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    /// Constraint name as printed by the tool.
    pub name: String,
    /// Requirement in nanoseconds.
    pub requirement: f64,
    /// Worst slack among the paths covered by the constraint.
    pub worst_slack: f64,
    /// Number of paths covered.
    pub paths: usize,
}

/// Per-kind delay totals for one path, see [`TimingPath::delay_breakdown`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DelayBreakdown {
    /// Logic cell hops.
    pub logic: KindTotal,
    /// Routed net hops.
    pub net: KindTotal,
    /// Clock hops found in the data path.
    pub clock: KindTotal,
}

/// Count and summed delay of the hops of one kind.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KindTotal {
    /// Number of hops.
    pub count: usize,
    /// Summed incremental delay in nanoseconds.
    pub delay: f64,
}
