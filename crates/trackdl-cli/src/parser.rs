//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for downloading and tagging tracks.
#[derive(Parser, Debug)]
#[command(name = "trackdl")]
#[command(about = "Download a track as M4A and tag it with artist, date and cover art")]
#[command(version)]
pub struct Cli {
    /// Directory the downloaded file is written to
    #[arg(long = "output-dir", env = "TRACKDL_OUTPUT_DIR", global = true)]
    pub output_dir: Option<PathBuf>,

    /// Cookie string forwarded to the lookup service
    #[arg(
        long = "cookies",
        env = "TRACKDL_COOKIES",
        global = true,
        hide_env_values = true
    )]
    pub cookies: Option<String>,

    /// Override the lookup service endpoint
    #[arg(long = "endpoint", env = "TRACKDL_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
