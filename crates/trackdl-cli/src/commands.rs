//! Subcommand definitions.

use clap::Subcommand;

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a track and print its metadata
    Info {
        /// Track page URL
        url: String,

        /// Print the raw descriptor as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a track, download it and tag the file
    Download {
        /// Track page URL
        url: String,
    },
}
