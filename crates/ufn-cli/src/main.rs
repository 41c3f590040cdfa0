//! ufn CLI
//!
//! Command-line interface for the unfollow notification pipeline

use clap::{Parser, Subcommand};
use ufn_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "ufn")]
#[command(about = "ufn - Follower cache synchronization and unfollow reporting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one synchronization cycle (fetch, diff, notify, persist)
    Sync(commands::sync::SyncArgs),
    /// Inspect the cached follower set
    Cache(commands::cache::CacheArgs),
}

fn main() {
    let cli = Cli::parse();

    init(Profile::Development);

    let result = match cli.command {
        Commands::Sync(args) => commands::sync::execute(args),
        Commands::Cache(args) => commands::cache::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
