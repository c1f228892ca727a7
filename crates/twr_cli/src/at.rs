//! `twr at`: the path covering a report line.
//!
//! Takes the 1-based line number an editor shows and prints the covering
//! path with its clock info, delay breakdown and the first few hops.

use twr_config::ReportConfig;
use twr_report::{ElementKind, TimingPath};

use crate::pipeline::{load_report, ns, resolve_config, resolve_format, status_label};
use crate::{AtArgs, GlobalArgs, ReportFormat};

/// Runs the `twr at` command.
///
/// Returns exit code 1 when no path covers the line.
pub fn run(args: &AtArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    if args.line == 0 {
        return Err("line numbers start at 1".into());
    }
    let config = resolve_config(global)?;
    let report = load_report(&args.report, &config.parser.to_parse_options())?;

    let Some(path) = report.path_at_line(args.line - 1) else {
        eprintln!(
            "no timing path at {}:{}",
            args.report.display(),
            args.line
        );
        return Ok(1);
    };

    match resolve_format(args.format, &config) {
        ReportFormat::Text => println!("{}", render(path, &config, global.color)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(path)?),
    }
    Ok(0)
}

/// Renders the detail block of `path`.
pub fn render(path: &TimingPath, config: &ReportConfig, color: bool) -> String {
    let mut lines = vec![
        format!("{}: {} -> {}", path.id, path.source, path.destination),
        format!("  slack        {} ({})", ns(path.slack), status_label(path, color)),
        format!("  requirement  {}", ns(path.requirement)),
        format!("  delay        {}", ns(path.delay)),
    ];

    let clock = path.clock_path.clone().unwrap_or_default();
    lines.push(format!(
        "  clocks       {} -> {}  skew {}  uncertainty {}",
        clock.source_clock.as_deref().unwrap_or("-"),
        clock.destination_clock.as_deref().unwrap_or("-"),
        ns(clock.clock_skew.unwrap_or(0.0)),
        ns(clock.uncertainty.unwrap_or(0.0)),
    ));

    let breakdown = path.delay_breakdown();
    lines.push(format!(
        "  breakdown    logic {} ({})  net {} ({})  clock {} ({})",
        breakdown.logic.count,
        ns(breakdown.logic.delay),
        breakdown.net.count,
        ns(breakdown.net.delay),
        breakdown.clock.count,
        ns(breakdown.clock.delay),
    ));

    let total = path.path_elements.len();
    let shown = config.output.preview_elements.min(total);
    if shown > 0 {
        lines.push(format!("  elements ({shown} of {total}):"));
        for element in &path.path_elements[..shown] {
            lines.push(format!(
                "    {:<6} {:>10}  {}",
                kind_label(element.kind),
                ns(element.delay),
                element.name
            ));
        }
    }
    lines.join("\n")
}

fn kind_label(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Logic => "logic",
        ElementKind::Net => "net",
        ElementKind::Clock => "clock",
    }
}
