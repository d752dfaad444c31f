//! Phase marker detection.
//!
//! The traced program prints literal `BEGIN ...` / `END ...` lines around
//! the regions it wants highlighted. Detection is plain substring
//! containment; the first marker in table order wins.

use super::schema::PhaseCategory;
use crate::utils::config::{
    BEGIN_BLOCK_READ, BEGIN_BLOCK_SCAN, BEGIN_INODE_SCAN, END_BLOCK_READ, END_BLOCK_SCAN,
    END_INODE_SCAN,
};

/// Whether a marker opens or closes its phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerEdge {
    Begin,
    End,
}

/// A recognized phase marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseMarker {
    pub category: PhaseCategory,
    pub edge: MarkerEdge,
}

const MARKERS: [(&str, PhaseCategory, MarkerEdge); 6] = [
    (BEGIN_BLOCK_SCAN, PhaseCategory::BlockScan, MarkerEdge::Begin),
    (END_BLOCK_SCAN, PhaseCategory::BlockScan, MarkerEdge::End),
    (BEGIN_BLOCK_READ, PhaseCategory::BlockRead, MarkerEdge::Begin),
    (END_BLOCK_READ, PhaseCategory::BlockRead, MarkerEdge::End),
    (BEGIN_INODE_SCAN, PhaseCategory::InodeScan, MarkerEdge::Begin),
    (END_INODE_SCAN, PhaseCategory::InodeScan, MarkerEdge::End),
];

/// Find the phase marker carried by a line, if any
pub fn detect_marker(line: &str) -> Option<PhaseMarker> {
    MARKERS
        .iter()
        .find(|(literal, _, _)| line.contains(literal))
        .map(|&(_, category, edge)| PhaseMarker { category, edge })
}
