//! gnuplot script generation.
//!
//! The script is emitted in one pass over a finished [`Timeline`]:
//! - header directives (reversed y axis, no legend, palette, plot command)
//! - one inline vector record per I/O event, terminated by `end`
//! - one rectangle object plus its fill style per closed phase
//!
//! Time runs down the y axis and file offset along x, so every event is a
//! horizontal stroke starting at its position and spanning its extent.

use crate::parser::{IoEvent, IoKind, Phase, PhaseCategory};
use crate::timeline::Timeline;
use crate::utils::config::{
    OverlayStyle, BLOCK_READ_OVERLAY, BLOCK_SCAN_OVERLAY, INODE_SCAN_OVERLAY, PALETTE,
    READ_COLOR, RECORD_FLAG, SEEK_COLOR,
};
use log::info;
use std::fmt::Write;

/// Plot configuration
#[derive(Debug, Clone, Default)]
pub struct PlotConfig {
    /// Optional `set title` directive
    pub title: Option<String>,
}

impl PlotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Generate the gnuplot script for a timeline
///
/// **Public** - main entry point for the plot emitter
///
/// # Arguments
/// * `timeline` - Finished translation
/// * `config` - Optional plot configuration (defaults when `None`)
///
/// # Returns
/// The complete script; identical input always yields identical bytes
pub fn generate_script(timeline: &Timeline, config: Option<&PlotConfig>) -> String {
    let config = config.cloned().unwrap_or_default();
    info!(
        "Generating plot with {} events and {} phases",
        timeline.events.len(),
        timeline.phases.len()
    );

    let mut script = String::new();
    render_header(&mut script, &config);

    for event in &timeline.events {
        render_event(&mut script, event);
    }
    script.push_str("end\n");

    let mut object_id = 1;
    for category in PhaseCategory::ALL {
        let style = overlay_style(category);
        for phase in timeline.phases.get(category) {
            render_overlay(&mut script, object_id, phase, style);
            object_id += 1;
        }
    }

    info!("Plot generated successfully ({} bytes)", script.len());
    script
}

fn render_header(out: &mut String, config: &PlotConfig) {
    out.push_str("set yrange [] reverse\n");
    out.push_str("unset key\n");

    let stops: Vec<String> = PALETTE
        .iter()
        .enumerate()
        .map(|(i, color)| format!("{} '{}'", i + 1, color))
        .collect();
    let _ = writeln!(out, "set palette defined ( {})", stops.join(", "));
    out.push('\n');

    if let Some(title) = &config.title {
        let _ = writeln!(out, "set title \"{}\"", title);
    }
    out.push_str("plot \"-\" with vectors lc rgb variable\n");
}

fn render_event(out: &mut String, event: &IoEvent) {
    let _ = writeln!(
        out,
        " {} {} {} {} {}",
        event.position,
        event.time,
        event.extent,
        RECORD_FLAG,
        event_color(event.kind)
    );
}

fn render_overlay(out: &mut String, object_id: usize, phase: &Phase, style: OverlayStyle) {
    let _ = writeln!(
        out,
        "set obj {} rectangle from graph 0, first {} to graph 1, first {}",
        object_id, phase.start_time, phase.end_time
    );
    let _ = writeln!(
        out,
        "set obj {} fc rgbcolor \"{}\" fs solid {} noborder",
        object_id, style.color, style.density
    );
}

pub fn event_color(kind: IoKind) -> &'static str {
    match kind {
        IoKind::Seek => SEEK_COLOR,
        IoKind::Read => READ_COLOR,
    }
}

pub fn overlay_style(category: PhaseCategory) -> OverlayStyle {
    match category {
        PhaseCategory::BlockScan => BLOCK_SCAN_OVERLAY,
        PhaseCategory::BlockRead => BLOCK_READ_OVERLAY,
        PhaseCategory::InodeScan => INODE_SCAN_OVERLAY,
    }
}
