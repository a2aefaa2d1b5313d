//! Command-line argument definitions for the Flowscribe CLI.
//!
//! Arguments select the flowchart document to read, where the Mermaid text
//! goes, which configuration file applies, and how verbose logging is.

use clap::Parser;

/// Command-line arguments for the Flowscribe tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input flowchart document (TOML)
    #[arg(help = "Path to the input flowchart document")]
    pub input: String,

    /// Path to the output Mermaid file
    #[arg(short, long, default_value = "out.mmd")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
