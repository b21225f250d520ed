use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "statsearch")]
#[command(about = "statsearch - Autocomplete search over players, teams and leagues.")]
#[command(version = env!("VERSION"))]
pub struct Cli {
    /// Path to one or more config files (merged in order).
    #[arg(long, default_value = "config.toml", action = clap::ArgAction::Append)]
    pub config: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a sample config file.
    NewConfig {
        /// Output path for config file.
        #[arg(short, long, default_value = "config.toml")]
        path: PathBuf,
    },

    /// Search one collection and print the results as JSON.
    Query {
        /// Collection to search (eg: players, teams, leagues).
        #[arg(short, long)]
        collection: String,

        /// Search query.
        query: String,
    },
}
