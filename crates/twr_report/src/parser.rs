//! Single-pass report scanner.
//!
//! The scanner walks the report line by line. Each line is classified by
//! [`line::classify`](crate::line::classify); the resulting events drive a
//! small section state machine:
//!
//! ```text
//!   Header --listing header--> DataPath --slack trailer--> Header
//!     |                          ^   |
//!     |  clock header            |   | clock header
//!     v                          |   v
//!   SourceClock --divider + hop--+  DestClock
//!     |                              ^
//!     +------ divider + clock -------+
//! ```
//!
//! A slack header closes the open path (keeping it only if both endpoints
//! were seen) and starts a new one in the `Header` section.

use tracing::{debug, trace};

use crate::builder::PathBuilder;
use crate::clock::{self, ClockHint, ClockSide};
use crate::element::{cell_line, legacy_line, net_line};
use crate::line::{self, HeaderFields, Line, SlackHeader};
use crate::model::{ElementKind, TimingPath, TimingReport};
use crate::options::ParseOptions;

/// Listing section the scanner is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Path header, or between listings.
    Header,
    /// Launch clock tree listing.
    SourceClock,
    /// Data path listing.
    DataPath,
    /// Capture clock tree listing.
    DestClock,
}

impl Section {
    fn clock_side(self) -> Option<ClockSide> {
        match self {
            Section::SourceClock => Some(ClockSide::Source),
            Section::DestClock => Some(ClockSide::Destination),
            Section::Header | Section::DataPath => None,
        }
    }
}

/// Input to the section state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A slack header opened a new path.
    PathStart,
    /// A detailed listing column header.
    ListingHeader,
    /// A clock header claimed the listing of the given side.
    ClockClaimed(ClockSide),
    /// A divider inside a clock listing followed by another clock header.
    DividerBeforeClock,
    /// A divider inside a clock listing followed by a data path hop.
    DividerBeforeData,
    /// The slack trailer of a data path listing.
    SlackTrailer,
}

/// Transition table of the section state machine.
pub fn next_section(current: Section, event: Event) -> Section {
    match (current, event) {
        (_, Event::PathStart) => Section::Header,
        (_, Event::ListingHeader) => Section::DataPath,
        (_, Event::ClockClaimed(ClockSide::Source)) => Section::SourceClock,
        (_, Event::ClockClaimed(ClockSide::Destination)) => Section::DestClock,
        (Section::SourceClock | Section::DestClock, Event::DividerBeforeClock) => {
            Section::DestClock
        }
        (Section::SourceClock | Section::DestClock, Event::DividerBeforeData) => {
            Section::DataPath
        }
        (Section::DataPath, Event::SlackTrailer) => Section::Header,
        (current, _) => current,
    }
}

/// Splits report text into lines, dropping a trailing `\r` from each.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect()
}

struct Scanner<'a> {
    lines: &'a [&'a str],
    options: &'a ParseOptions,
    section: Section,
    current: Option<PathBuilder>,
    paths: Vec<TimingPath>,
}

impl<'a> Scanner<'a> {
    fn new(lines: &'a [&'a str], options: &'a ParseOptions) -> Self {
        Self {
            lines,
            options,
            section: Section::Header,
            current: None,
            paths: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<TimingPath> {
        for index in 0..self.lines.len() {
            self.step(index);
        }
        self.close_path();
        self.paths
    }

    fn step(&mut self, index: usize) {
        let kind = line::classify(self.lines[index], self.options);
        if let Line::Slack(header) = kind {
            self.open_path(index, header);
            return;
        }
        let Some(mut path) = self.current.take() else {
            return;
        };
        path.touch(index);
        match kind {
            Line::Slack(_) | Line::Blank => {}
            Line::ListingHeader => self.fire(Event::ListingHeader),
            Line::ClockEdge => self.clock_header(&mut path, index),
            Line::Divider => self.divider(index),
            Line::Text(text) => {
                let fields = HeaderFields::scan(text);
                if !fields.is_empty() {
                    path.apply(fields, index);
                }
                match self.section.clock_side() {
                    Some(side) => clock_hop(&mut path, side, text),
                    None if self.section == Section::DataPath => self.data_hop(&mut path, text),
                    None => {}
                }
            }
        }
        self.current = Some(path);
    }

    fn fire(&mut self, event: Event) {
        self.section = next_section(self.section, event);
    }

    fn open_path(&mut self, index: usize, header: SlackHeader) {
        self.close_path();
        self.current = Some(PathBuilder::new(index, header));
        self.fire(Event::PathStart);
    }

    fn close_path(&mut self) {
        let Some(path) = self.current.take() else {
            return;
        };
        if !path.is_complete() {
            debug!(
                start_line = path.start_line(),
                "dropping path without source and destination"
            );
            return;
        }
        if let Some(finished) = path.finish(self.paths.len()) {
            self.paths.push(finished);
        }
    }

    fn clock_header(&mut self, path: &mut PathBuilder, index: usize) {
        let hint = clock::lookahead(self.lines, index, self.options.clock_lookahead);
        let side = clock::side_for(path.source_clock_claimed(), path.destination_announced());
        if hint == ClockHint::FollowedByClock {
            path.announce_destination();
        }
        let claimed = path.claim_clock(side);
        trace!(line = index, ?hint, ?side, claimed, "clock listing header");
        if claimed {
            self.fire(Event::ClockClaimed(side));
        }
    }

    fn divider(&mut self, index: usize) {
        if self.section.clock_side().is_none() {
            return;
        }
        let Some(next) = self.lines.get(index + 1) else {
            return;
        };
        if line::is_clock_edge(next) {
            self.fire(Event::DividerBeforeClock);
        } else if line::has_data_shape(next) {
            self.fire(Event::DividerBeforeData);
        }
    }

    fn data_hop(&mut self, path: &mut PathBuilder, text: &str) {
        if let Some(cell) = cell_line(text) {
            let kind = if self.options.is_clock_cell(cell.cell_type) {
                ElementKind::Clock
            } else {
                ElementKind::Logic
            };
            path.push_data(cell.into_element(kind));
        } else if let Some(net) = net_line(text) {
            path.push_data(net);
        } else if line::is_slack_trailer(text) {
            self.fire(Event::SlackTrailer);
        } else if let Some(element) = legacy_line(text) {
            path.push_data(element);
        }
    }
}

// Every recognized hop of a clock tree listing is a clock hop, whatever its
// cell type; nets stay nets.
fn clock_hop(path: &mut PathBuilder, side: ClockSide, text: &str) {
    if let Some(cell) = cell_line(text) {
        path.push_clock(side, cell.into_element(ElementKind::Clock));
    } else if let Some(net) = net_line(text) {
        path.push_clock(side, net);
    }
}

/// Parses report text with the given options.
///
/// Never fails: unrecognized lines are skipped and paths without both
/// endpoints are dropped.
pub fn parse_with(text: &str, options: &ParseOptions) -> TimingReport {
    let lines = split_lines(text);
    let paths = Scanner::new(&lines, options).run();
    let report = TimingReport::from_paths(paths);
    debug!(
        lines = lines.len(),
        paths = report.summary.total_paths,
        failed = report.summary.failed_paths,
        "parsed timing report"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table() {
        use Event::*;
        use Section::*;
        assert_eq!(next_section(DataPath, PathStart), Header);
        assert_eq!(next_section(SourceClock, ListingHeader), DataPath);
        assert_eq!(next_section(DataPath, ClockClaimed(ClockSide::Destination)), DestClock);
        assert_eq!(next_section(SourceClock, DividerBeforeClock), DestClock);
        assert_eq!(next_section(DestClock, DividerBeforeData), DataPath);
        assert_eq!(next_section(DataPath, SlackTrailer), Header);
    }

    #[test]
    fn events_outside_their_sections_are_ignored() {
        use Event::*;
        use Section::*;
        assert_eq!(next_section(Header, DividerBeforeClock), Header);
        assert_eq!(next_section(DataPath, DividerBeforeData), DataPath);
        assert_eq!(next_section(SourceClock, SlackTrailer), SourceClock);
    }

    #[test]
    fn split_lines_keeps_indices_stable() {
        assert_eq!(split_lines("a\r\nb\n\nc"), vec!["a", "b", "", "c"]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn text_before_first_slack_is_ignored() {
        let text = "Source: top/a\nDestination: top/b\n";
        assert!(parse_with(text, &ParseOptions::default()).paths.is_empty());
    }

    #[test]
    fn slack_trailer_closes_listing() {
        let text = "\
Slack (MET) :  1.000ns
  Source:       top/reg_a
  Destination:  top/reg_b
    Location   Delay type   Incr(ns)  Path(ns)  Netlist Resource(s)
    SLICE_X0Y0   FDRE (Prop_fdre_C_Q)   0.456   0.456 r  reg_a/Q
                         slack                                  1.000
    SLICE_X0Y1   LUT2 (Prop_lut2_I0_O)  0.124   0.580 r  after/O
";
        let report = parse_with(text, &ParseOptions::default());
        let path = &report.paths[0];
        assert_eq!(path.path_elements.len(), 1);
        assert_eq!(path.delay, 0.456);
    }

    #[test]
    fn divider_before_second_clock_listing() {
        let text = "\
Slack (MET) :             0.800ns  (required time - arrival time)
  Source:                 top/reg_a/C
  Destination:            top/reg_b/D
    Location             Delay type                Incr(ns)  Path(ns)    Netlist Resource(s)
  -------------------------------------------------------------------    -------------------
                         (clock clk rise edge)        0.000     0.000 r
    BUFGCTRL_X0Y0        BUFG (Prop_bufg_I_O)         0.096     2.000 r  clk_BUFG_inst/O
                         net (fo=2, routed)           1.400     3.400    top/launch_clk
  -------------------------------------------------------------------    -------------------
                         (clock clk rise edge)        2.000     2.000 r
    BUFGCTRL_X0Y0        BUFG (Prop_bufg_I_O)         0.096     4.000 r  clk_BUFG_inst/O
                         net (fo=2, routed)           1.300     5.300    top/capture_clk
  -------------------------------------------------------------------    -------------------
    SLICE_X0Y0           FDRE (Prop_fdre_C_Q)         0.456     3.856 r  top/reg_a/Q
                         net (fo=1, routed)           0.600     4.456    top/n_0
";
        let report = parse_with(text, &ParseOptions::default());
        let path = &report.paths[0];
        let names = |elements: &[crate::model::PathElement]| -> Vec<String> {
            elements.iter().map(|e| e.name.clone()).collect()
        };
        assert_eq!(
            names(path.source_clock_elements.as_deref().unwrap()),
            vec!["clk_BUFG_inst/O", "top/launch_clk"]
        );
        assert_eq!(
            names(path.dest_clock_elements.as_deref().unwrap()),
            vec!["clk_BUFG_inst/O", "top/capture_clk"]
        );
        assert_eq!(names(&path.path_elements), vec!["top/reg_a/Q", "top/n_0"]);
        assert!((path.delay - 1.056).abs() < 0.0005);
    }

    #[test]
    fn custom_clock_markers() {
        let text = "\
Slack (MET) :  1.000ns
  Source:       top/reg_a
  Destination:  top/reg_b
    Location   Delay type   Incr(ns)  Path(ns)  Netlist Resource(s)
    BUFGCTRL_X0Y0   BUFG (Prop_bufg_I_O)   0.093   0.093 r  clk_bufg/O
    SLICE_X0Y0   CARRY4 (Prop_carry4_CI_CO[3])   0.114   0.207 r  sum_carry/CO[3]
";
        let options = ParseOptions {
            clock_cell_markers: vec!["CARRY".into()],
            ..ParseOptions::default()
        };
        let kinds: Vec<ElementKind> = parse_with(text, &options).paths[0]
            .path_elements
            .iter()
            .map(|e| e.kind)
            .collect();
        assert_eq!(kinds, vec![ElementKind::Logic, ElementKind::Clock]);
    }
}
