//! Structured logging facility
//!
//! Single initialization point via `init(profile)`:
//! - Development: human-readable output
//! - Production: JSON structured output (one line per event)
//! - Test: no-op registry so tests can install their own subscriber
//!
//! # Usage
//!
//! ```rust
//! use ufn_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;

pub use init::{init, Profile};
