//! twr CLI: command-line access to FPGA timing report parsing.
//!
//! Provides `twr summary` for pass/fail totals over one or more reports,
//! `twr paths` for a per-path listing, and `twr at` for the path covering
//! a given line of a report.

#![warn(missing_docs)]

mod at;
mod paths;
mod pipeline;
mod summary;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// twr: inspect Vivado and ISE timing reports.
#[derive(Parser, Debug)]
#[command(name = "twr", version, about = "FPGA timing report inspector")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `twr.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print path totals and the critical path of each report.
    Summary(SummaryArgs),
    /// List the paths of a report.
    Paths(PathsArgs),
    /// Show the path covering a report line.
    At(AtArgs),
}

/// Arguments for the `twr summary` subcommand.
#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Timing report files.
    #[arg(required = true, num_args = 1..)]
    pub reports: Vec<PathBuf>,
}

/// Arguments for the `twr paths` subcommand.
#[derive(Parser, Debug)]
pub struct PathsArgs {
    /// Timing report file.
    pub report: PathBuf,

    /// Only list paths that failed timing.
    #[arg(long)]
    pub failed: bool,

    /// Output format (default from `twr.toml`, else text).
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

/// Arguments for the `twr at` subcommand.
#[derive(Parser, Debug)]
pub struct AtArgs {
    /// Timing report file.
    pub report: PathBuf,

    /// 1-based line number, as shown by an editor.
    pub line: usize,

    /// Output format (default from `twr.toml`, else text).
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Command output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stdout().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };
    init_logging(&global);

    let result = match cli.command {
        Command::Summary(ref args) => summary::run(args, &global),
        Command::Paths(ref args) => paths::run(args, &global),
        Command::At(ref args) => at::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the level
/// chosen by `--quiet`/`--verbose`.
fn init_logging(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(global)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(global.color)
        .init();
}

fn default_log_level(global: &GlobalArgs) -> &'static str {
    if global.quiet {
        "error"
    } else if global.verbose {
        "debug"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn global(quiet: bool, verbose: bool) -> GlobalArgs {
        GlobalArgs {
            quiet,
            verbose,
            color: false,
            config: None,
        }
    }

    #[test]
    fn parse_summary_multiple_reports() {
        let cli = Cli::parse_from(["twr", "summary", "a.rpt", "b.twr"]);
        match cli.command {
            Command::Summary(ref args) => {
                assert_eq!(
                    args.reports,
                    vec![PathBuf::from("a.rpt"), PathBuf::from("b.twr")]
                );
            }
            _ => panic!("expected Summary command"),
        }
    }

    #[test]
    fn summary_requires_a_report() {
        assert!(Cli::try_parse_from(["twr", "summary"]).is_err());
    }

    #[test]
    fn parse_paths_default() {
        let cli = Cli::parse_from(["twr", "paths", "top.rpt"]);
        match cli.command {
            Command::Paths(ref args) => {
                assert_eq!(args.report, PathBuf::from("top.rpt"));
                assert!(!args.failed);
                assert!(args.format.is_none());
            }
            _ => panic!("expected Paths command"),
        }
    }

    #[test]
    fn parse_paths_with_args() {
        let cli = Cli::parse_from(["twr", "paths", "top.rpt", "--failed", "--format", "json"]);
        match cli.command {
            Command::Paths(ref args) => {
                assert!(args.failed);
                assert_eq!(args.format, Some(ReportFormat::Json));
            }
            _ => panic!("expected Paths command"),
        }
    }

    #[test]
    fn parse_at() {
        let cli = Cli::parse_from(["twr", "at", "top.rpt", "120", "-f", "text"]);
        match cli.command {
            Command::At(ref args) => {
                assert_eq!(args.report, PathBuf::from("top.rpt"));
                assert_eq!(args.line, 120);
                assert_eq!(args.format, Some(ReportFormat::Text));
            }
            _ => panic!("expected At command"),
        }
    }

    #[test]
    fn at_rejects_non_numeric_line() {
        assert!(Cli::try_parse_from(["twr", "at", "top.rpt", "twelve"]).is_err());
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["twr", "--quiet", "--color", "never", "paths", "top.rpt"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["twr", "summary", "a.rpt", "--verbose", "--color", "always"]);
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Always);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["twr", "--config", "/path/to/twr.toml", "summary", "a.rpt"]);
        assert_eq!(cli.config.as_deref(), Some("/path/to/twr.toml"));
    }

    #[test]
    fn log_levels() {
        assert_eq!(default_log_level(&global(false, false)), "warn");
        assert_eq!(default_log_level(&global(false, true)), "debug");
        assert_eq!(default_log_level(&global(true, true)), "error");
    }
}
