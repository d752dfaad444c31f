//! Turn classified calls into I/O events.
//!
//! The reconstructor owns the [`RunState`] and the growing event list.
//! Every event is stamped with the cursor *before* the operation and the
//! clock at the moment the call is applied; the cursor moves right after
//! the event is recorded so the next call sees the new value.

use super::state::RunState;
use crate::parser::{IoEvent, IoKind, Syscall};

/// Folds calls into the event sequence in invocation order
#[derive(Debug, Clone, Default)]
pub struct EventReconstructor {
    state: RunState,
    events: Vec<IoEvent>,
}

impl EventReconstructor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn events(&self) -> &[IoEvent] {
        &self.events
    }

    pub fn advance_clock(&mut self, delta: u64) {
        self.state.advance_clock(delta);
    }

    /// Record a SEEK from the current cursor to `new_position`
    pub fn on_seek(&mut self, new_position: i64, call_duration: Option<f64>) {
        let position = self.state.position;
        let extent = self.state.jump_to(new_position);
        self.events.push(IoEvent {
            position,
            time: self.state.time,
            extent,
            kind: IoKind::Seek,
            call_duration,
        });
    }

    /// Record a READ of `length` bytes at the current cursor
    pub fn on_read(&mut self, length: i64, call_duration: Option<f64>) {
        self.events.push(IoEvent {
            position: self.state.position,
            time: self.state.time,
            extent: length,
            kind: IoKind::Read,
            call_duration,
        });
        self.state.advance_cursor(length);
    }

    /// Apply one classified call
    ///
    /// A positioned read is a seek then a read at the same clock value;
    /// only the read half carries the line's call duration.
    pub fn apply(&mut self, call: Syscall, call_duration: Option<f64>) {
        match call {
            Syscall::Seek { offset } => self.on_seek(offset, call_duration),
            Syscall::Read { length } => self.on_read(length, call_duration),
            Syscall::PositionedRead { offset, length } => {
                self.on_seek(offset, None);
                self.on_read(length, call_duration);
            }
        }
    }

    pub fn into_parts(self) -> (RunState, Vec<IoEvent>) {
        (self.state, self.events)
    }
}
