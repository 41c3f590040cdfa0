use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Member - one entity in the tracked follower set
///
/// The `id` is the only field the diff logic ever consults; `name` and
/// `screen_name` are carried through for notification context. Any
/// provider-specific fields beyond the fixed shape land in `extra` so
/// they survive a store round trip without schema changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Stable unique identifier, consistent across fetch and store
    pub id: u64,

    /// Display name
    pub name: String,

    /// Handle within the source service
    pub screen_name: String,

    /// Open-ended auxiliary attributes (opaque to diff logic)
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Member {
    /// Create a new Member with the fixed-shape fields and no extras
    pub fn new(id: u64, name: impl Into<String>, screen_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            screen_name: screen_name.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Attach an auxiliary attribute
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
