//! Pair BEGIN/END markers into closed phase intervals.
//!
//! One pending slot per category. A second BEGIN before the END replaces
//! the pending start; an END with nothing pending is dropped.

use crate::parser::{MarkerEdge, Phase, PhaseCategory, PhaseMarker};
use log::debug;

#[derive(Debug, Clone, Default)]
pub struct PhaseTracker {
    pending: [Option<u64>; 3],
    closed: [Vec<Phase>; 3],
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open or close a phase at clock value `time`
    pub fn observe(&mut self, marker: PhaseMarker, time: u64) {
        let slot = marker.category.index();
        match marker.edge {
            MarkerEdge::Begin => {
                if let Some(previous) = self.pending[slot].replace(time) {
                    debug!(
                        "Re-opened {} at {} (pending start {} discarded)",
                        marker.category, time, previous
                    );
                }
            }
            MarkerEdge::End => match self.pending[slot].take() {
                Some(start_time) => self.closed[slot].push(Phase {
                    category: marker.category,
                    start_time,
                    end_time: time,
                }),
                None => debug!("Ignoring END {} at {} with no open phase", marker.category, time),
            },
        }
    }

    pub fn pending(&self, category: PhaseCategory) -> Option<u64> {
        self.pending[category.index()]
    }

    pub fn closed(&self, category: PhaseCategory) -> &[Phase] {
        &self.closed[category.index()]
    }

    /// Closed phases per category; unterminated phases are dropped
    pub fn finish(self) -> [Vec<Phase>; 3] {
        for category in PhaseCategory::ALL {
            if let Some(start) = self.pending[category.index()] {
                debug!("Dropping unterminated {} started at {}", category, start);
            }
        }
        self.closed
    }
}
