use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Read-only query API over Olympic gold-medal records.
#[derive(Parser, Debug)]
#[command(name = "goldmedal-server", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server (default).
    Serve,
    /// Load a JSON dataset into PostgreSQL, replacing existing rows.
    Import {
        /// Dataset file; defaults to DATASET_PATH.
        path: Option<PathBuf>,
    },
}
