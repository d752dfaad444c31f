//! gnuplot rendering of reconstructed timelines.
//!
//! Converts a finished timeline into a self-contained gnuplot script:
//! seek/read strokes with phase rectangles layered behind them.

pub mod generator;
pub mod summary;

// Re-export main types
pub use generator::{event_color, generate_script, overlay_style, PlotConfig};
pub use summary::generate_text_summary;
