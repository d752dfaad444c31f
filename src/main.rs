//! Seek Trace CLI
//!
//! Turns an strace log of a program's file I/O into a gnuplot script
//! showing every seek and read over time.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use seek_trace::commands::{
    display_version, execute_plot, inspect_timeline_file, validate_args, PlotArgs,
};
use seek_trace::gnuplot::PlotConfig;

/// Seek Trace - file access timelines from strace logs
#[derive(Parser, Debug)]
#[command(name = "seek-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a trace into a gnuplot script
    Plot {
        /// Trace files, read in order ("-" or none for stdin)
        inputs: Vec<PathBuf>,

        /// Output path for the script (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also export the reconstructed timeline as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Plot title
        #[arg(long)]
        title: Option<String>,

        /// Print text summary to stderr
        #[arg(long)]
        summary: bool,
    },

    /// Summarize a JSON timeline export
    Inspect {
        /// Path to timeline JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (stderr; stdout may carry the script)
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Plot {
            inputs,
            output,
            json,
            title,
            summary,
        } => {
            let mut plot_config = PlotConfig::new();
            if let Some(title_str) = title {
                plot_config = plot_config.with_title(title_str);
            }

            let args = PlotArgs {
                inputs,
                output,
                output_json: json,
                plot_config,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_plot(args)?;
        }

        Commands::Inspect { file } => {
            inspect_timeline_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
