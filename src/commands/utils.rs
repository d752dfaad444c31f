use anyhow::Result;
use std::path::Path;
use crate::gnuplot::generate_text_summary;
use crate::output::read_timeline;
use crate::timeline::calculate_io_stats;
use crate::utils::config::SCHEMA_VERSION;

/// Inspect a JSON timeline export
pub fn inspect_timeline_file(file_path: &Path) -> Result<()> {
    println!("Inspecting timeline: {}", file_path.display());

    let timeline = read_timeline(file_path)?;

    println!("✓ Valid timeline JSON");
    println!("  Version: {}", timeline.version);
    println!("  Lines read: {}", timeline.lines_read);
    println!("  Events: {}", timeline.events.len());
    println!("  Phases: {}", timeline.phases.len());
    println!(
        "  Final cursor: {} at clock {}",
        timeline.final_state.position, timeline.final_state.time
    );
    println!();
    println!("{}", generate_text_summary(&calculate_io_stats(&timeline)));

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Seek Trace v{}", env!("CARGO_PKG_VERSION"));
    println!("Timeline Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Reconstructs file seek/read timelines from strace logs as gnuplot scripts.");
}
