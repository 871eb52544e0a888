//! Command-line interface for Marquee.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Marquee - venue, artist and show booking directory
#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file; overrides the default search locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the web server (default)
    #[command(alias = "s")]
    Serve,

    /// Apply pending database migrations and exit
    Migrate,

    /// Write a default config file if none exists
    InitConfig,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}
