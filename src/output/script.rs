//! gnuplot script output writer.
//!
//! Writes rendered scripts to a file or to standard output.

use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write a script to a file
///
/// **Public** - main entry point for script output
///
/// # Arguments
/// * `script` - Script text from the plot generator
/// * `output_path` - Path to output file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
///
/// # Example
/// ```ignore
/// let script = generate_script(&timeline, None);
/// write_script(&script, "accesses.gp")?;
/// ```
pub fn write_script(script: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing plot script to: {}", output_path.display());

    validate_path(output_path)?;
    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    write_script_to(script, BufWriter::new(file))?;

    info!(
        "Script written successfully ({} bytes, {:.2} KB)",
        script.len(),
        script.len() as f64 / 1024.0
    );

    Ok(())
}

/// Write a script to standard output
pub fn write_script_stdout(script: &str) -> Result<(), OutputError> {
    let stdout = io::stdout();
    write_script_to(script, stdout.lock())
}

/// Write a script to any writer and flush it
pub fn write_script_to<W: Write>(script: &str, mut writer: W) -> Result<(), OutputError> {
    writer
        .write_all(script.as_bytes())
        .map_err(OutputError::WriteFailed)?;

    writer.flush().map_err(OutputError::WriteFailed)?;

    Ok(())
}

/// Validate an output path before writing
///
/// **Public** - shared by all writers
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create missing parent directories
///
/// **Public** - shared by all writers
pub fn create_parent_dirs(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
