//! Clock tree listing disambiguation.
//!
//! A detailed Vivado path prints up to two clock tree listings, each opened
//! by a `(clock <name> rise edge)` header, and neither is labeled as launch
//! or capture side. The parser decides with a bounded forward scan.

use crate::line::{is_clock_edge, is_divider};

/// What the forward scan found after a clock header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockHint {
    /// A `---` rule directly followed by a `SLICE` hop: the listing runs
    /// into the data path.
    LeadsIntoData,
    /// Another clock header appears first.
    FollowedByClock,
    /// Neither was found inside the window.
    Undetermined,
}

/// Which clock tree a listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSide {
    /// Launch register clock tree.
    Source,
    /// Capture register clock tree.
    Destination,
}

/// Scans at most `window` lines starting at the header on `start`.
pub fn lookahead(lines: &[&str], start: usize, window: usize) -> ClockHint {
    let end = lines.len().min(start.saturating_add(window));
    for j in start..end {
        let leads_into_slice = lines
            .get(j + 1)
            .is_some_and(|next| next.contains("SLICE"));
        if is_divider(lines[j]) && leads_into_slice {
            return ClockHint::LeadsIntoData;
        }
        if j > start && is_clock_edge(lines[j]) {
            return ClockHint::FollowedByClock;
        }
    }
    ClockHint::Undetermined
}

/// Assigns a side to a clock header.
///
/// Every hint names the current header as the launch side. A header is the
/// capture side only once the launch listing has been claimed, or when an
/// earlier header announced a second listing.
pub fn side_for(source_claimed: bool, destination_announced: bool) -> ClockSide {
    if source_claimed || destination_announced {
        ClockSide::Destination
    } else {
        ClockSide::Source
    }
}
