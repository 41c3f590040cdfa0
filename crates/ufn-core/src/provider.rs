//! Source provider seam.

use crate::errors::Result;
use crate::model::Snapshot;

/// Abstract fetcher returning the current member set from the external
/// system.
///
/// The raw API mechanics (auth, pagination, rate limits, timeouts) belong
/// to implementations and their client libraries; the contract here is
/// only "this call either returns a snapshot or fails".
pub trait SourceProvider {
    /// Fetch the current member set
    ///
    /// # Errors
    ///
    /// - `Fetch` - the provider is unreachable or returned unusable data
    fn fetch(&self) -> Result<Snapshot>;
}
