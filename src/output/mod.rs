//! Output writers for plot scripts and timeline exports.
//!
//! This module handles writing data in various formats:
//! - gnuplot scripts (file or stdout)
//! - JSON timelines (write and read back)

pub mod json;
pub mod script;

// Re-export main functions
pub use json::{read_timeline, write_timeline};
pub use script::{
    create_parent_dirs, validate_path, write_script, write_script_stdout, write_script_to,
};
