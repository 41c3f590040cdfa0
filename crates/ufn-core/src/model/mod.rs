//! Domain model for the tracked member set

pub mod member;
pub mod snapshot;

pub use member::Member;
pub use snapshot::Snapshot;
