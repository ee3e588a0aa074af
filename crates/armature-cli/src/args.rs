//! Command-line argument definitions.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, CSV header handling, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the armature diagram tool
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the members CSV file (DisplayName, Annotation, Stereotype)
    pub members: String,

    /// Path to the connections CSV file (Kind, Participant1, Participant2, ...)
    pub connections: String,

    /// Path to the output file; format is chosen by extension
    /// (dot, gv, png, svg, pdf)
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Graph name used in the generated diagram
    #[arg(short, long)]
    pub name: Option<String>,

    /// Treat the first CSV row as data instead of a header
    #[arg(long)]
    pub no_headers: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
