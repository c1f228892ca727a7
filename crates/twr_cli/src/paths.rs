//! `twr paths`: one line per timing path.

use twr_report::{TimingPath, TimingReport};

use crate::pipeline::{load_report, ns, resolve_config, resolve_format, status_label};
use crate::{GlobalArgs, PathsArgs, ReportFormat};

/// Runs the `twr paths` command.
///
/// JSON output is the whole report, or the array of failed paths with
/// `--failed`.
pub fn run(args: &PathsArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let report = load_report(&args.report, &config.parser.to_parse_options())?;

    match resolve_format(args.format, &config) {
        ReportFormat::Text => {
            for path in selected(&report, args.failed) {
                println!("{}", render_line(path, global.color));
            }
        }
        ReportFormat::Json => {
            let json = if args.failed {
                let failed: Vec<&TimingPath> = report.failed_paths().collect();
                serde_json::to_string_pretty(&failed)?
            } else {
                serde_json::to_string_pretty(&report)?
            };
            println!("{json}");
        }
    }
    Ok(0)
}

fn selected(report: &TimingReport, failed_only: bool) -> impl Iterator<Item = &TimingPath> {
    report.paths.iter().filter(move |p| !failed_only || p.failed)
}

/// Renders one path as a single line. Line numbers are 1-based.
pub fn render_line(path: &TimingPath, color: bool) -> String {
    format!(
        "{:<8} {:>12}  {}  {} -> {}  delay {}  {} elements  lines {}-{}",
        path.id,
        ns(path.slack),
        status_label(path, color),
        path.source,
        path.destination,
        ns(path.delay),
        path.path_elements.len(),
        path.start_line + 1,
        path.end_line + 1
    )
}
