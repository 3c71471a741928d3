//! CLI parse: clap types for jsondir. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// jsondir - load a directory of JSON fragments as one document
#[derive(Parser, Debug)]
#[command(name = "jsondir")]
#[command(about = "Merge a directory of JSON files into one tree and query or edit it")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load an entry point and print the merged tree
    Dump {
        /// Entry point: `db`, `db.json` or `db/`
        entry: PathBuf,
        /// Pretty-print with tab indentation
        #[arg(long)]
        pretty: bool,
        /// Write the tree to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the value at a dotted key path
    Get {
        entry: PathBuf,
        /// Dotted key path, e.g. `server.tls.port`
        key: String,
        #[arg(long)]
        pretty: bool,
    },
    /// Load, set a value at a dotted key path, and write the result
    Set {
        entry: PathBuf,
        key: String,
        /// New value as a JSON literal, e.g. `42`, `"text"`, `{"a":1}`
        value: String,
        /// File the updated tree is written to
        #[arg(long, short)]
        output: PathBuf,
        /// Concatenate onto an existing array instead of replacing it
        #[arg(long)]
        append_arrays: bool,
        /// Replace non-map values met along the path with empty maps
        #[arg(long)]
        force_through: bool,
        /// Replace an existing map instead of merging into it
        #[arg(long)]
        no_merge_maps: bool,
        #[arg(long)]
        pretty: bool,
    },
}

impl Commands {
    /// Command name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Dump { .. } => "dump",
            Commands::Get { .. } => "get",
            Commands::Set { .. } => "set",
        }
    }
}
