//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod plot;
pub mod utils;

// Re-export main command functions
pub use models::PlotArgs;
pub use plot::{execute_plot, validate_args};
pub use utils::{display_version, inspect_timeline_file};
