//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "crc-sleuth")]
#[command(about = "Reverse-engineer one-byte checksums in hex-encoded records", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress status messages and progress)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the search command.
#[derive(Args, Clone)]
pub(crate) struct SearchArgs {
    /// Input file: one hex-encoded block per line
    #[arg(short, long)]
    pub file: PathBuf,

    /// Byte offset of the checksum within each block
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,

    /// Only report hypotheses that hold for at least this many blocks
    /// (with --auto, unset or 0 means every block)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Skip hypotheses computed over a single byte
    #[arg(short, long)]
    pub skip: bool,

    /// Try every byte offset as the checksum position
    #[arg(long)]
    pub auto: bool,

    /// Restrict the search to these algorithms (e.g., sum8,xor8,crc8)
    #[arg(short, long, value_delimiter = ',')]
    pub algorithms: Option<Vec<String>>,

    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Search a corpus for checksum hypotheses
    Search(SearchArgs),

    /// List all supported checksum algorithms
    List,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show the effective settings
    Show,
}
