//! Human-readable timeline digest.

use crate::parser::PhaseCategory;
use crate::timeline::IoStats;

/// Create a text summary with phase totals and I/O counters
pub fn generate_text_summary(stats: &IoStats) -> String {
    let mut lines = Vec::new();

    lines.push("  I/O TIMELINE".to_string());
    lines.push(format!("  Clock:   {}", stats.elapsed));
    lines.push(format!(
        "  Seeks:   {} ({} backward, {} bytes travelled)",
        stats.seek_count, stats.backward_seeks, stats.seek_distance
    ));
    lines.push(format!(
        "  Reads:   {} ({} bytes)",
        stats.read_count, stats.bytes_read
    ));
    lines.push(String::new());

    lines.push("  ┏━━━━━━━━━━━━━━┳━━━━━━━━┳━━━━━━━━━━━━━━┳━━━━━━━━━┓".to_string());
    lines.push(format!(
        "  ┃ {:<12} ┃ {:^6} ┃ {:^12} ┃ {:^7} ┃",
        "PHASE", "COUNT", "TIME", "%"
    ));
    lines.push("  ┣━━━━━━━━━━━━━━╋━━━━━━━━╋━━━━━━━━━━━━━━╋━━━━━━━━━┫".to_string());

    for category in PhaseCategory::ALL {
        lines.push(format!(
            "  ┃ {:<12} ┃ {:>6} ┃ {:>12} ┃ {:>6.1}% ┃",
            category.label(),
            stats.phase_counts[category.index()],
            stats.phase_time[category.index()],
            stats.phase_percentage(category)
        ));
    }

    lines.push("  ┗━━━━━━━━━━━━━━┻━━━━━━━━┻━━━━━━━━━━━━━━┻━━━━━━━━━┛".to_string());

    lines.join("\n")
}
