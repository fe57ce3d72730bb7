//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::types::AccumulationMode;

/// Reformat a plain-text quote list into a notes learner topic file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct CliArgs {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Paths used when no subcommand is given.
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a quote list into a topic file (the default).
    Convert(ConvertArgs),

    /// Print the topic and nuggets found in a formatted file.
    Inspect {
        /// Formatted file to read (defaults to the configured output path).
        file: Option<PathBuf>,

        /// Emit JSON instead of a listing.
        #[arg(long)]
        json: bool,
    },
}

/// Arguments for a conversion run.
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Plain-text quote list, one quote per line.
    pub input: Option<PathBuf>,

    /// Destination file, overwritten if it exists.
    pub output: Option<PathBuf>,

    /// Turn every non-empty line into its own quote instead of keeping only
    /// the last line of each run of adjacent lines.
    #[arg(long)]
    pub every_line: bool,
}

impl ConvertArgs {
    /// The accumulation mode selected by the flags.
    pub const fn mode(&self) -> AccumulationMode {
        if self.every_line {
            AccumulationMode::EveryLine
        } else {
            AccumulationMode::LastLine
        }
    }
}
