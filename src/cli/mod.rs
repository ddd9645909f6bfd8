//! Command-line interface wiring for ae-pulse.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod query;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "OpenFDA adverse-event dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Query(args) => query::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the JSON API and static dashboard.
    Serve(serve::Args),
    /// Fetch one drug's adverse events and print the summary as JSON.
    Query(query::Args),
}
