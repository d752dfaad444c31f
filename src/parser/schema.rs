//! Data model for reconstructed trace activity.
//!
//! These are the records the timeline builder accumulates and the
//! plot/JSON writers consume. All of them serialize with serde so a
//! timeline can be exported and read back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a reconstructed I/O operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IoKind {
    /// Cursor jump (lseek, or the positioning half of pread)
    Seek,
    /// Sequential transfer starting at the cursor
    Read,
}

/// One reconstructed I/O operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IoEvent {
    /// Cursor value before the operation
    pub position: i64,

    /// Accumulated clock when the operation was recorded
    pub time: u64,

    /// Signed jump distance for a seek, byte length for a read
    pub extent: i64,

    pub kind: IoKind,

    /// `<seconds>` suffix from the call's trace line, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_duration: Option<f64>,
}

impl IoEvent {
    /// Cursor value once this operation has been applied
    pub fn end_position(&self) -> i64 {
        self.position + self.extent
    }
}

/// Named phase categories the traced program annotates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseCategory {
    BlockScan,
    BlockRead,
    InodeScan,
}

impl PhaseCategory {
    /// All categories in overlay emission order
    pub const ALL: [PhaseCategory; 3] = [
        PhaseCategory::BlockScan,
        PhaseCategory::BlockRead,
        PhaseCategory::InodeScan,
    ];

    /// Stable slot index, matching the order of [`PhaseCategory::ALL`]
    pub fn index(self) -> usize {
        match self {
            PhaseCategory::BlockScan => 0,
            PhaseCategory::BlockRead => 1,
            PhaseCategory::InodeScan => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PhaseCategory::BlockScan => "block scan",
            PhaseCategory::BlockRead => "block read",
            PhaseCategory::InodeScan => "inode scan",
        }
    }
}

impl fmt::Display for PhaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One closed phase interval `[start_time, end_time)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub category: PhaseCategory,
    pub start_time: u64,
    pub end_time: u64,
}

impl Phase {
    pub fn duration(&self) -> u64 {
        self.end_time.saturating_sub(self.start_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_position_negative_seek() {
        let event = IoEvent {
            position: 8192,
            time: 3,
            extent: -4096,
            kind: IoKind::Seek,
            call_duration: None,
        };
        assert_eq!(event.end_position(), 4096);
    }

    #[test]
    fn test_category_index_matches_order() {
        for (i, category) in PhaseCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_io_event_json_skips_missing_duration() {
        let event = IoEvent {
            position: 0,
            time: 10,
            extent: 4096,
            kind: IoKind::Seek,
            call_duration: None,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"position":0,"time":10,"extent":4096,"kind":"seek"}"#);
    }
}
