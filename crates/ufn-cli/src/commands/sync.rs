//! Synchronization cycle command

use clap::Args;
use ufn_core_types::RunContext;
use ufn_engine::providers::JsonFileProvider;
use ufn_engine::sinks::JsonLineSink;
use ufn_engine::Synchronizer;
use ufn_store::SqliteStore;

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Path of the SQLite follower cache
    #[arg(long, default_value = ".ufn/followers.db")]
    pub db: String,

    /// JSON file holding the current follower set
    #[arg(long)]
    pub source: String,

    /// File the unfollow report is appended to, one JSON record per line
    #[arg(long, default_value = ".ufn/channel.ndjson")]
    pub channel: String,
}

pub fn execute(args: SyncArgs) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = std::path::Path::new(&args.db).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let provider = JsonFileProvider::new(&args.source);
    let mut store = SqliteStore::open(&args.db)?;
    let sink = JsonLineSink::new(&args.channel);

    let ctx = RunContext::new();
    let summary = Synchronizer::new(&provider, &mut store, &sink).run(&ctx)?;
    summary.emit();

    println!("Sync complete:");
    println!("  run_id: {}", summary.run_id);
    println!("  current: {}", summary.current);
    println!("  cached: {}", summary.cached);
    println!("  follows: {}", summary.follows);
    println!("  unfollows: {}", summary.unfollows);

    Ok(())
}
