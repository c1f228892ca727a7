//! Structured model of FPGA static timing analysis reports.
//!
//! This crate turns the text of a timing report (Vivado `report_timing`
//! output or an ISE `.twr` file) into a [`TimingReport`]: one [`TimingPath`]
//! per reported path, with endpoints, slack, requirement, the data path hop
//! list and the launch/capture clock tree listings. Numbers are extracted
//! as printed; nothing is recomputed except each path's total delay, which
//! is the sum of its data path hops.
//!
//! # Usage
//!
//! ```ignore
//! let text = std::fs::read_to_string("top_timing.rpt")?;
//! let report = twr_report::parse(&text);
//! println!("{} of {} paths failed", report.summary.failed_paths, report.summary.total_paths);
//!
//! if let Some(path) = twr_report::path_at_line(&text, 120) {
//!     println!("{} -> {}: {:.3} ns", path.source, path.destination, path.slack);
//! }
//! ```
//!
//! # Architecture
//!
//! - [`model`]: report, path, hop and clock types
//! - [`line`]: line classification and path header fields
//! - [`element`]: hop line parsers for both report dialects
//! - [`clock`]: clock tree listing lookahead
//! - [`builder`]: per-path accumulation and finalization
//! - [`parser`]: the single-pass section state machine
//! - [`options`]: heuristics exposed for tuning

#![warn(missing_docs)]

pub mod builder;
pub mod clock;
pub mod element;
pub mod line;
pub mod model;
pub mod options;
pub mod parser;

pub use model::{
    ClockPathInfo, Constraint, DelayBreakdown, ElementKind, KindTotal, PathElement, Summary,
    TimingPath, TimingReport,
};
pub use options::ParseOptions;
pub use parser::parse_with;

/// Parses report text with the default [`ParseOptions`].
///
/// Total over any input: unrecognized lines are skipped and a path missing
/// its `Source:` or `Destination:` line is dropped.
pub fn parse(text: &str) -> TimingReport {
    parse_with(text, &ParseOptions::default())
}

/// Parses `text` and returns the path covering `line` (0-based), if any.
pub fn path_at_line(text: &str, line: usize) -> Option<TimingPath> {
    parse(text).path_at_line(line).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
Timing Report

Slack (MET) :             0.523ns  (required time - arrival time)
  Source:                 top/reg_a
  Destination:            top/reg_b
  Requirement:            2.000ns  (clk rise@2.000ns - clk rise@0.000ns)

    Location             Delay type                Incr(ns)  Path(ns)    Netlist Resource(s)
  -------------------------------------------------------------------    -------------------
    SLICE_X0Y0           FDRE (Prop_fdre_C_Q)         0.100     0.100 r  reg_a/Q
    SLICE_X1Y0           LUT2 (Prop_lut2_I0_O)        0.250     0.350 r  b_i_1/O
";

    #[test]
    fn parse_single_path() {
        let report = parse(REPORT);
        assert_eq!(report.summary.total_paths, 1);
        assert_eq!(report.summary.failed_paths, 0);
        assert!(report.summary.critical_path.is_none());
        assert!(report.constraints.is_empty());

        let path = &report.paths[0];
        assert_eq!(path.id, "path_0");
        assert_eq!(path.source, "reg_a");
        assert_eq!(path.destination, "reg_b");
        assert_eq!(path.requirement, 2.0);
        assert_eq!(path.path_elements.len(), 2);
        assert!((path.delay - 0.350).abs() < 0.0005);
        assert_eq!(path.start_line, 2);
    }

    #[test]
    fn path_at_line_reparses() {
        let path = path_at_line(REPORT, 4).unwrap();
        assert_eq!(path.id, "path_0");
        assert!(path_at_line(REPORT, 0).is_none());
        assert!(path_at_line(REPORT, 500).is_none());
    }

    #[test]
    fn empty_input() {
        let report = parse("");
        assert!(report.paths.is_empty());
        assert_eq!(report.summary.total_paths, 0);
    }
}
