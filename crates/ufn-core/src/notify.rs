//! Notification record construction and delivery seam.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::diff::model::Delta;
use crate::digest::delta_digest;
use crate::errors::{Result, UfnError, UfnErrorKind};
use crate::model::Snapshot;

/// Fixed descriptive label carried in every notification payload
pub const NOTIFICATION_LABEL: &str = "unfollow report";

/// Attributes of one removed member, as delivered to the consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedMember {
    pub name: String,
    pub screen_name: String,
}

/// Structured message describing detected removals
///
/// `members` is ordered ascending by member id and sourced from the
/// **cached** snapshot: removed members are by definition absent from
/// `current`, so their attributes only exist in the prior snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    /// Size of the removed set
    pub count: usize,
    /// Fixed descriptive label
    pub label: String,
    /// Removed members, ascending by id
    pub members: Vec<RemovedMember>,
    /// Digest of the removed-id set; identical across resends of the same
    /// delta so consumers can de-duplicate
    pub delta_digest: String,
    /// When the removal was detected
    pub detected_at: DateTime<Utc>,
}

/// Build a NotificationRecord for the removals in `delta`.
///
/// # Errors
///
/// - `Internal` - a removed id is absent from the cached snapshot; the
///   delta was not computed from this cache
pub fn build_notification(cached: &Snapshot, delta: &Delta) -> Result<NotificationRecord> {
    let mut members = Vec::with_capacity(delta.removed.len());
    // BTreeSet iteration gives ascending id order
    for &id in &delta.removed {
        let member = cached.get(id).ok_or_else(|| {
            UfnError::new(UfnErrorKind::Internal)
                .with_op("build_notification")
                .with_member_id(id)
                .with_message("removed id missing from cached snapshot")
        })?;
        members.push(RemovedMember {
            name: member.name.clone(),
            screen_name: member.screen_name.clone(),
        });
    }

    Ok(NotificationRecord {
        count: delta.removed.len(),
        label: NOTIFICATION_LABEL.to_string(),
        members,
        delta_digest: delta_digest(&delta.removed),
        detected_at: Utc::now(),
    })
}

/// Delivery seam to the downstream queue/topic.
///
/// The synchronizer sends **before** persisting store mutations, so a
/// failed send aborts the cycle and the next run resends the identical
/// record. Consumers must therefore tolerate duplicates.
pub trait NotificationSink {
    /// Deliver a record to the downstream consumer
    ///
    /// # Errors
    ///
    /// - `Delivery` - the record could not be handed to the channel
    fn send(&self, record: &NotificationRecord) -> Result<()>;
}
