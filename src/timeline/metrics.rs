//! Summary statistics over a reconstructed timeline.

use super::Timeline;
use crate::parser::{IoKind, PhaseCategory};
use log::debug;

/// Aggregate I/O statistics
///
/// **Public** - returned from calculate_io_stats
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IoStats {
    pub seek_count: usize,

    pub read_count: usize,

    /// Sum of all read lengths
    pub bytes_read: u64,

    /// Sum of absolute seek distances
    pub seek_distance: u64,

    /// Seeks that moved the cursor to a lower offset
    pub backward_seeks: usize,

    /// Final clock value
    pub elapsed: u64,

    /// Closed phase count per category, in [`PhaseCategory::ALL`] order
    pub phase_counts: [usize; 3],

    /// Summed phase durations per category
    pub phase_time: [u64; 3],
}

impl IoStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Seeks: {} ({} backward, {} bytes travelled) | Reads: {} ({} bytes) | Clock: {}",
            self.seek_count,
            self.backward_seeks,
            self.seek_distance,
            self.read_count,
            self.bytes_read,
            self.elapsed
        )
    }

    /// Share of the clock spent inside phases of `category`
    pub fn phase_percentage(&self, category: PhaseCategory) -> f64 {
        if self.elapsed == 0 {
            return 0.0;
        }
        (self.phase_time[category.index()] as f64 / self.elapsed as f64) * 100.0
    }
}

/// Calculate I/O statistics for a timeline
///
/// **Public** - main entry point for timeline metrics
pub fn calculate_io_stats(timeline: &Timeline) -> IoStats {
    let mut stats = IoStats {
        elapsed: timeline.final_state.time,
        ..Default::default()
    };

    for event in &timeline.events {
        match event.kind {
            IoKind::Seek => {
                stats.seek_count += 1;
                stats.seek_distance = stats.seek_distance.saturating_add(event.extent.unsigned_abs());
                if event.extent < 0 {
                    stats.backward_seeks += 1;
                }
            }
            IoKind::Read => {
                stats.read_count += 1;
                stats.bytes_read = stats.bytes_read.saturating_add(event.extent.unsigned_abs());
            }
        }
    }

    for category in PhaseCategory::ALL {
        let phases = timeline.phases.get(category);
        stats.phase_counts[category.index()] = phases.len();
        stats.phase_time[category.index()] = phases.iter().map(|p| p.duration()).sum();
    }

    debug!("Timeline stats: {}", stats.summary());
    stats
}
