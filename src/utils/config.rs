//! Configuration and constants for the CLI.

/// Current JSON timeline export schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Vector colors for reconstructed I/O events (gnuplot `lc rgb variable`)
pub const SEEK_COLOR: &str = "0xff0000";
pub const READ_COLOR: &str = "0x000000";

// Placeholder fourth column of every vector record
pub const RECORD_FLAG: u8 = 0;

/// 10-stop gradient declared in the script header
pub const PALETTE: [&str; 10] = [
    "#fffcf6", "#fff7db", "#fff4c2", "#feecae", "#f8ca8c",
    "#f0a848", "#c07860", "#a86060", "#784860", "#604860",
];

// Phase marker literals printed by the traced program
pub const BEGIN_BLOCK_SCAN: &str = "BEGIN BLOCK SCAN";
pub const END_BLOCK_SCAN: &str = "END BLOCK SCAN";
pub const BEGIN_BLOCK_READ: &str = "BEGIN BLOCK READ";
pub const END_BLOCK_READ: &str = "END BLOCK READ";
pub const BEGIN_INODE_SCAN: &str = "BEGIN INODE SCAN";
pub const END_INODE_SCAN: &str = "END INODE SCAN";

/// Stdin placeholder accepted in the input list
pub const STDIN_PATH: &str = "-";

/// Fill applied to a phase rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    pub color: &'static str,
    pub density: &'static str,
}

pub const BLOCK_SCAN_OVERLAY: OverlayStyle = OverlayStyle { color: "yellow", density: "0.5" };
pub const BLOCK_READ_OVERLAY: OverlayStyle = OverlayStyle { color: "blue", density: "0.25" };
pub const INODE_SCAN_OVERLAY: OverlayStyle = OverlayStyle { color: "green", density: "0.25" };
