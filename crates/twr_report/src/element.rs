//! Parsers for the hop lines of a detailed path listing.
//!
//! Three line shapes are recognized:
//!
//! - cell line (Vivado): `SLICE_X9Y337  FDCE (Prop_CFF_SLICEL_C_Q)  0.079  1050.452 r  u_core/q_reg/Q`
//! - net line (Vivado):  `net (fo=2, routed)  3.077  1053.529    u_core/n_0`
//! - legacy line (ISE):  `SLICE_X12Y34.AQ  Tcko  0.514  data_reg<0>`
//!
//! Vivado lines carry both an incremental and a cumulative time; only the
//! increment is kept.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{ElementKind, PathElement};

static CELL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(\S+)\s+([\w_]+)\s+\(([^)]+)\)",
        r"\s+(-?\d+(?:\.\d+)?)\s+(-?\d+(?:\.\d+)?)",
        r"(?:\s+[rf])?(?:\s+(\S.*?))?\s*$",
    ))
    .unwrap()
});

static NET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*net\s+\(([^)]+)\)",
        r"\s+(-?\d+(?:\.\d+)?)\s+(-?\d+(?:\.\d+)?)",
        r"(?:\s+(\S.*?))?\s*$",
    ))
    .unwrap()
});

// The location must look like a placement site (`SLICE_X12Y34.AQ`, `P56.PAD`,
// `IOB_X0Y1`); free-form parentheses are only allowed as a delay type suffix,
// as in `net (fanout=2)` or `Tah (-Th)`.
static LEGACY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*([A-Za-z]\w*(?:\.[\w<>\[\]]+|_X\d+Y\d+\S*))",
        r"\s+([A-Za-z][\w\s]*?(?:\s*\([^)]*\))?)",
        r"\s+(-?\d+(?:\.\d+)?)(?:\s+(\S.*?))?\s*$",
    ))
    .unwrap()
});

/// A Vivado cell line.
#[derive(Debug, Clone, PartialEq)]
pub struct CellLine<'a> {
    /// Placement site.
    pub location: &'a str,
    /// Cell type, e.g. `LUT6` or `BUFG`.
    pub cell_type: &'a str,
    /// Timing arc in parentheses, e.g. `Prop_lut6_I0_O`.
    pub delay_type: &'a str,
    /// Incremental delay in nanoseconds.
    pub incr: f64,
    /// Downstream pin or instance, when printed.
    pub resource: Option<&'a str>,
}

impl CellLine<'_> {
    /// Builds the hop; the name falls back to the cell type.
    pub fn into_element(self, kind: ElementKind) -> PathElement {
        PathElement {
            kind,
            name: self.resource.unwrap_or(self.cell_type).to_string(),
            delay: self.incr,
            location: Some(self.location.to_string()),
            delay_type: Some(self.delay_type.to_string()),
            resource: Some(self.cell_type.to_string()),
        }
    }
}

/// Parses a Vivado cell line.
pub fn cell_line(line: &str) -> Option<CellLine<'_>> {
    let caps = CELL_RE.captures(line)?;
    Some(CellLine {
        location: caps.get(1)?.as_str(),
        cell_type: caps.get(2)?.as_str(),
        delay_type: caps.get(3)?.as_str(),
        incr: caps[4].parse().ok()?,
        resource: caps.get(6).map(|m| m.as_str()),
    })
}

/// Parses a Vivado net line into a [`ElementKind::Net`] hop.
pub fn net_line(line: &str) -> Option<PathElement> {
    let caps = NET_RE.captures(line)?;
    let fanout = caps.get(1)?.as_str();
    let incr = caps[2].parse().ok()?;
    let name = caps.get(4).map_or("net", |m| m.as_str());
    Some(PathElement {
        kind: ElementKind::Net,
        name: name.to_string(),
        delay: incr,
        location: None,
        delay_type: Some(format!("net {fanout}")),
        resource: Some(name.to_string()),
    })
}

/// Parses an ISE listing line.
///
/// The kind comes from the delay type text: `net`/`fanout` mark a route,
/// `clock` a clock hop, anything else is logic.
pub fn legacy_line(line: &str) -> Option<PathElement> {
    let caps = LEGACY_RE.captures(line)?;
    let location = caps.get(1)?.as_str();
    let delay_type = caps.get(2)?.as_str().trim();
    let delay = caps[3].parse().ok()?;
    let resource = caps.get(4).map_or("", |m| m.as_str());

    let lower = delay_type.to_lowercase();
    let kind = if lower.contains("net") || lower.contains("fanout") {
        ElementKind::Net
    } else if lower.contains("clock") {
        ElementKind::Clock
    } else {
        ElementKind::Logic
    };

    let name = if resource.is_empty() { location } else { resource };
    Some(PathElement {
        kind,
        name: name.to_string(),
        delay,
        location: Some(location.to_string()),
        delay_type: Some(delay_type.to_string()),
        resource: Some(resource.to_string()),
    })
}
