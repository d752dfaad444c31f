use std::path::PathBuf;
use crate::gnuplot::PlotConfig;

/// Arguments for the plot command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct PlotArgs {
    /// Trace files in read order (empty or `-` = stdin)
    pub inputs: Vec<PathBuf>,

    /// Output path for the gnuplot script (None = stdout)
    pub output: Option<PathBuf>,

    /// Output path for the JSON timeline export (optional)
    pub output_json: Option<PathBuf>,

    /// Plot configuration
    pub plot_config: PlotConfig,

    /// Print text summary to stderr
    pub print_summary: bool,
}
