//! `twr summary`: pass/fail totals over one or more reports.
//!
//! Reports are read and parsed in parallel; output keeps the order of the
//! command line.

use std::path::PathBuf;

use rayon::prelude::*;
use twr_report::TimingReport;

use crate::pipeline::{load_report, ns, paint, resolve_config};
use crate::{GlobalArgs, SummaryArgs};

/// Runs the `twr summary` command.
///
/// Returns exit code 1 when any path failed and `output.fail_on_violation`
/// is set, 0 otherwise.
pub fn run(args: &SummaryArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let options = config.parser.to_parse_options();

    let reports: Vec<(PathBuf, TimingReport)> = args
        .reports
        .par_iter()
        .map(|path| load_report(path, &options).map(|report| (path.clone(), report)))
        .collect::<Result<_, String>>()?;

    let mut failed = 0;
    for (path, report) in &reports {
        failed += report.summary.failed_paths;
        if !global.quiet {
            println!("{}", render(&path.display().to_string(), report, global.color));
        }
    }

    if failed > 0 && config.output.fail_on_violation {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Renders the summary block of one report.
pub fn render(name: &str, report: &TimingReport, color: bool) -> String {
    let summary = &report.summary;
    let failed = if summary.failed_paths > 0 {
        paint(&format!("{} failed", summary.failed_paths), "31", color)
    } else {
        format!("{} failed", summary.failed_paths)
    };
    let mut out = format!("{name}: {} paths, {failed}", summary.total_paths);
    if let Some(worst) = report.worst_slack() {
        out.push_str(&format!(", worst slack {}", ns(worst)));
    }
    if let Some(critical) = &summary.critical_path {
        out.push_str(&format!(
            "\n  critical: {} {} -> {} (slack {})",
            critical.id,
            critical.source,
            critical.destination,
            ns(critical.slack)
        ));
    }
    out
}
