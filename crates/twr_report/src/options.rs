//! Parser tuning knobs.

/// Number of lines scanned after a `(clock ... rise edge)` header.
pub const DEFAULT_CLOCK_LOOKAHEAD: usize = 20;

/// Cell-type markers of clock buffers, clock generators and transceivers.
pub const DEFAULT_CLOCK_CELL_MARKERS: [&str; 4] = ["BUFG", "MMCM", "PLL", "GTYE4"];

/// Resource column titles of the Vivado and ISE listing headers.
pub const DEFAULT_LISTING_RESOURCE_TOKENS: [&str; 2] = ["Netlist Resource", "Physical Resource"];

/// Options controlling the heuristics of [`parse_with`](crate::parse_with).
///
/// The defaults reproduce the behavior of [`parse`](crate::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Lookahead window, in lines, used to tell clock tree listings apart.
    pub clock_lookahead: usize,
    /// A Vivado data path cell whose type contains one of these markers is
    /// classified as a clock hop instead of logic.
    pub clock_cell_markers: Vec<String>,
    /// A line containing `Location`, `Delay type` and one of these tokens
    /// opens a detailed listing.
    pub listing_resource_tokens: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            clock_lookahead: DEFAULT_CLOCK_LOOKAHEAD,
            clock_cell_markers: DEFAULT_CLOCK_CELL_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            listing_resource_tokens: DEFAULT_LISTING_RESOURCE_TOKENS
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl ParseOptions {
    /// Returns `true` if `cell_type` names a clock buffer or clock generator.
    pub fn is_clock_cell(&self, cell_type: &str) -> bool {
        self.clock_cell_markers
            .iter()
            .any(|marker| cell_type.contains(marker.as_str()))
    }
}
