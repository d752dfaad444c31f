//! Trace line classification and the shared data model.
//!
//! This module handles:
//! - Recognizing timing fields, lseek/read/pread calls and call durations
//! - Detecting phase markers printed by the traced program
//! - Defining the event and phase records

pub mod line;
pub mod marker;
pub mod schema;

// Re-export main types
pub use line::{classify_line, LineRecord, Syscall};
pub use marker::{detect_marker, MarkerEdge, PhaseMarker};
pub use schema::{IoEvent, IoKind, Phase, PhaseCategory};
