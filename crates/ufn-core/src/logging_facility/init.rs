//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// No global subscriber; tests install their own
    Test,
}

static INIT_ONCE: Once = Once::new();

// Default directives when RUST_LOG is unset. EnvFilter matches targets at
// `::` boundaries, so each workspace crate must be listed by its full name.
const DEV_DEFAULT_DIRECTIVES: &str =
    "ufn_core=debug,ufn_core_types=debug,ufn_store=debug,ufn_engine=debug,ufn_cli=debug";
const PROD_DEFAULT_DIRECTIVES: &str =
    "ufn_core=info,ufn_core_types=info,ufn_store=info,ufn_engine=info,ufn_cli=info";

/// Initialize the logging facility
///
/// This function should be called once at application startup.
/// It sets up the tracing subscriber based on the selected profile.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level (the per-run
///   summary line lands here)
/// - **Test**: no-op; tests capture with their own subscriber
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new(DEV_DEFAULT_DIRECTIVES)),
                    )
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new(PROD_DEFAULT_DIRECTIVES)),
                    )
                    .init();
            }
            Profile::Test => {
                // Tests install their own capture subscriber
                tracing_subscriber::registry().init();
            }
        }
    });
}
