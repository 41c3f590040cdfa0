//! Snapshot diff computation
//!
//! `engine::diff` is the pure entry point; `model::Delta` is its result.

pub mod engine;
pub mod model;

pub use engine::diff;
pub use model::Delta;
