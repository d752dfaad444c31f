//! Plot command implementation.
//!
//! The plot command:
//! 1. Reads the trace inputs in order
//! 2. Reconstructs the seek/read timeline and phases
//! 3. Renders the gnuplot script
//! 4. Writes the script (and the optional JSON export)

use super::models::PlotArgs;
use crate::gnuplot::{generate_script, generate_text_summary};
use crate::output::{write_script, write_script_stdout, write_timeline};
use crate::timeline::{calculate_io_stats, translate_inputs};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the plot command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable trace inputs
/// * File write errors
pub fn execute_plot(args: PlotArgs) -> Result<()> {
    let start_time = Instant::now();

    // Step 1: Translate trace
    info!("Step 1/3: Reconstructing timeline...");
    let timeline = translate_inputs(&args.inputs).context("Failed to read trace input")?;

    let stats = calculate_io_stats(&timeline);
    info!("Timeline: {}", stats.summary());
    debug!(
        "Phases: {} block scans, {} block reads, {} inode scans",
        timeline.phases.block_scan.len(),
        timeline.phases.block_read.len(),
        timeline.phases.inode_scan.len()
    );

    // Step 2: Render script
    info!("Step 2/3: Rendering plot script...");
    let script = generate_script(&timeline, Some(&args.plot_config));

    // Step 3: Write outputs
    info!("Step 3/3: Writing output...");
    match &args.output {
        Some(path) => {
            write_script(&script, path).context("Failed to write plot script")?;
            info!("✓ Plot script written to: {}", path.display());
        }
        None => write_script_stdout(&script).context("Failed to write plot script to stdout")?,
    }

    if let Some(json_path) = &args.output_json {
        write_timeline(&timeline, json_path).context("Failed to write timeline JSON")?;
        info!("✓ Timeline written to: {}", json_path.display());
    }

    if args.print_summary {
        eprintln!("\n{}", generate_text_summary(&stats));
    }

    let elapsed = start_time.elapsed();
    info!("Plot completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate plot arguments
///
/// **Public** - can be called before execute_plot for early validation
pub fn validate_args(args: &PlotArgs) -> Result<()> {
    if args.inputs.iter().any(|p| p.as_os_str().is_empty()) {
        anyhow::bail!("Input path cannot be empty");
    }

    if let Some(output) = &args.output {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
        if args.inputs.contains(output) {
            anyhow::bail!("Output path {} is also an input", output.display());
        }
    }

    if let Some(json) = &args.output_json {
        if json.as_os_str().is_empty() {
            anyhow::bail!("JSON output path cannot be empty");
        }
        if args.output.as_ref() == Some(json) {
            anyhow::bail!("Script and JSON outputs must be different files");
        }
    }

    if let Some(title) = &args.plot_config.title {
        if title.contains('"') || title.contains('\n') {
            anyhow::bail!("Title cannot contain double quotes or newlines");
        }
    }

    Ok(())
}
