//! File-backed source provider.
//!
//! Reads a JSON array of member objects, as exported by the upstream
//! fetch job, and validates it into a snapshot. Anything unreadable,
//! unparsable, or internally inconsistent is a fetch failure: the cycle
//! must abort rather than diff against bad data.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ufn_core::errors::{Result, UfnError, UfnErrorKind};
use ufn_core::model::{Member, Snapshot};
use ufn_core::provider::SourceProvider;

/// Source provider reading the current member set from a JSON file
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    /// Create a provider for the given file path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn fetch_error(&self, reason: String) -> UfnError {
        UfnError::new(UfnErrorKind::Fetch)
            .with_op("fetch_current")
            .with_message(format!("{}: {}", self.path.display(), reason))
    }
}

impl SourceProvider for JsonFileProvider {
    fn fetch(&self) -> Result<Snapshot> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| self.fetch_error(format!("failed to read member file: {}", e)))?;

        let members: Vec<Member> = serde_json::from_str(&content)
            .map_err(|e| self.fetch_error(format!("JSON parse error: {}", e)))?;

        // Duplicate ids mean a corrupt or truncated-and-restarted export
        let mut seen = HashSet::with_capacity(members.len());
        for member in &members {
            if !seen.insert(member.id) {
                return Err(self
                    .fetch_error(format!("duplicate member id {}", member.id))
                    .with_member_id(member.id));
            }
        }

        Ok(Snapshot::from_members(members))
    }
}
