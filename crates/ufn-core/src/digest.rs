//! Delta digest computation.
//!
//! The digest identifies one detected removal set. Delivery is
//! at-least-once, so the same delta may be sent more than once after a
//! failed cycle; an idempotent-tolerant consumer can use the digest to
//! collapse resends.

use sha2::{Digest as _, Sha256};
use std::collections::BTreeSet;

/// Compute the SHA-256 digest of a removed-id set (hex-encoded).
///
/// The ids are serialized as a canonical JSON array in ascending order,
/// so the digest is identical across retries of the same delta.
pub fn delta_digest(removed: &BTreeSet<u64>) -> String {
    let ids: Vec<u64> = removed.iter().copied().collect();
    let canonical = serde_json::to_string(&ids).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
