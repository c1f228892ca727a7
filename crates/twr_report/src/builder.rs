//! Accumulation of one path while its lines are scanned.

use crate::clock::ClockSide;
use crate::line::{HeaderFields, SlackHeader};
use crate::model::{ClockPathInfo, PathElement, TimingPath};

/// A path under construction.
///
/// Fields stay optional until [`finish`](Self::finish), which applies the
/// defaults and drops paths without both endpoints.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    start_line: usize,
    end_line: usize,
    slack: f64,
    failed: bool,
    source: Option<String>,
    destination: Option<String>,
    requirement: Option<f64>,
    data_path_delay: Option<f64>,
    clock_path: Option<ClockPathInfo>,
    source_clock_line: Option<usize>,
    path_elements: Vec<PathElement>,
    source_clock_elements: Option<Vec<PathElement>>,
    dest_clock_elements: Option<Vec<PathElement>>,
    destination_announced: bool,
}

impl PathBuilder {
    /// Opens a path at the slack header on `line`.
    pub fn new(line: usize, header: SlackHeader) -> Self {
        Self {
            start_line: line,
            end_line: line,
            slack: header.slack,
            failed: header.failed(),
            source: None,
            destination: None,
            requirement: None,
            data_path_delay: None,
            clock_path: None,
            source_clock_line: None,
            path_elements: Vec::new(),
            source_clock_elements: None,
            dest_clock_elements: None,
            destination_announced: false,
        }
    }

    /// Line the path started on.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// Extends the path's line range to `line`.
    pub fn touch(&mut self, line: usize) {
        self.end_line = self.end_line.max(line);
    }

    /// Returns `true` once both endpoints have been seen.
    pub fn is_complete(&self) -> bool {
        self.source.is_some() && self.destination.is_some()
    }

    /// Records the header fields found on `line`.
    pub fn apply(&mut self, fields: HeaderFields<'_>, line: usize) {
        if let Some(source) = fields.source {
            self.source = Some(source.to_string());
        }
        if let Some(destination) = fields.destination {
            self.destination = Some(destination.to_string());
        }
        if let Some(requirement) = fields.requirement {
            self.requirement = Some(requirement);
        }
        if let Some(delay) = fields.data_path_delay {
            self.data_path_delay = Some(delay);
        }
        if let Some(clock) = fields.clocked_by {
            self.record_clock(clock, line);
        }
        if let Some(skew) = fields.clock_skew {
            self.clock_info().clock_skew = Some(skew);
        }
        if let Some(uncertainty) = fields.uncertainty {
            self.clock_info().uncertainty = Some(uncertainty);
        }
    }

    // First occurrence names the launch clock, a later line the capture clock.
    fn record_clock(&mut self, clock: &str, line: usize) {
        let first_line = self.source_clock_line;
        let info = self.clock_info();
        if info.source_clock.is_none() {
            info.source_clock = Some(clock.to_string());
            self.source_clock_line = Some(line);
        } else if info.destination_clock.is_none() && first_line != Some(line) {
            info.destination_clock = Some(clock.to_string());
        }
    }

    fn clock_info(&mut self) -> &mut ClockPathInfo {
        self.clock_path.get_or_insert_with(ClockPathInfo::default)
    }

    /// Returns `true` if a launch clock listing was already claimed.
    pub fn source_clock_claimed(&self) -> bool {
        self.source_clock_elements.is_some()
    }

    /// Returns `true` if an earlier clock header announced a capture listing.
    pub fn destination_announced(&self) -> bool {
        self.destination_announced
    }

    /// Notes that the next clock header belongs to the capture side.
    pub fn announce_destination(&mut self) {
        self.destination_announced = true;
    }

    /// Claims the listing slot for `side`. Each slot is claimed at most once.
    pub fn claim_clock(&mut self, side: ClockSide) -> bool {
        let slot = match side {
            ClockSide::Source => &mut self.source_clock_elements,
            ClockSide::Destination => &mut self.dest_clock_elements,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(Vec::new());
        true
    }

    /// Appends a clock tree hop to the listing of `side`.
    pub fn push_clock(&mut self, side: ClockSide, element: PathElement) {
        let slot = match side {
            ClockSide::Source => &mut self.source_clock_elements,
            ClockSide::Destination => &mut self.dest_clock_elements,
        };
        slot.get_or_insert_with(Vec::new).push(element);
    }

    /// Appends a data path hop.
    pub fn push_data(&mut self, element: PathElement) {
        self.path_elements.push(element);
    }

    /// Finalizes the path as `path_<id>`, or returns `None` if an endpoint
    /// is missing.
    pub fn finish(self, id: usize) -> Option<TimingPath> {
        let (Some(source), Some(destination)) = (self.source, self.destination) else {
            return None;
        };
        let delay: f64 = self.path_elements.iter().map(|e| e.delay).sum();
        if let Some(printed) = self.data_path_delay {
            tracing::trace!(id, printed, computed = delay, "data path delay recomputed from hops");
        }
        Some(TimingPath {
            id: format!("path_{id}"),
            source,
            destination,
            slack: self.slack,
            requirement: self.requirement.unwrap_or(0.0),
            delay,
            failed: self.failed,
            path_elements: self.path_elements,
            source_clock_elements: self.source_clock_elements,
            dest_clock_elements: self.dest_clock_elements,
            clock_path: self.clock_path,
            start_line: self.start_line,
            end_line: self.end_line,
        })
    }
}
