//! Running clock and file cursor.

use serde::{Deserialize, Serialize};

/// Clock and cursor for one translation
///
/// Starts at zero; there is exactly one per translation and it is owned
/// by whoever drives the translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    /// Accumulated relative timestamps
    pub time: u64,

    /// Reconstructed file offset
    pub position: i64,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_clock(&mut self, delta: u64) {
        self.time = self.time.saturating_add(delta);
    }

    /// Move the cursor to an absolute offset, returning the signed jump
    pub fn jump_to(&mut self, new_position: i64) -> i64 {
        let distance = new_position.saturating_sub(self.position);
        self.position = new_position;
        distance
    }

    /// Advance the cursor past a transfer of `length` bytes
    pub fn advance_cursor(&mut self, length: i64) {
        self.position = self.position.saturating_add(length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_backwards() {
        let mut state = RunState { time: 0, position: 8192 };
        assert_eq!(state.jump_to(1024), -7168);
        assert_eq!(state.position, 1024);
    }

    #[test]
    fn test_clock_accumulates() {
        let mut state = RunState::new();
        state.advance_clock(10);
        state.advance_clock(5);
        assert_eq!(state.time, 15);
    }
}
