//! Cached follower set inspection command

use clap::Args;
use ufn_core::store::SnapshotStore;
use ufn_store::SqliteStore;

#[derive(Debug, Args)]
pub struct CacheArgs {
    /// Path of the SQLite follower cache
    #[arg(long, default_value = ".ufn/followers.db")]
    pub db: String,

    /// Emit the cached members as a JSON array instead of a listing
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: CacheArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open(&args.db)?;
    let snapshot = store.get_all()?;

    if args.json {
        let members: Vec<_> = snapshot.members().collect();
        println!("{}", serde_json::to_string_pretty(&members)?);
        return Ok(());
    }

    println!("Cached followers: {}", snapshot.len());
    for member in snapshot.members() {
        println!("  {} {} (@{})", member.id, member.name, member.screen_name);
    }

    Ok(())
}
