//! Environment-supplied configuration
//!
//! Configuration failures are fatal: they are surfaced immediately at
//! startup, before any component is constructed, and never retried.

use thiserror::Error;
use ufn_core_types::Sensitive;

use crate::secrets::SecretResolver;

/// Recognized environment variables
pub const ENV_API_KEY: &str = "UFN_API_KEY";
pub const ENV_API_SECRET: &str = "UFN_API_SECRET";
pub const ENV_STORE_PATH: &str = "UFN_STORE_PATH";
pub const ENV_CHANNEL: &str = "UFN_CHANNEL";
pub const ENV_REGION: &str = "UFN_REGION";
pub const ENV_ENCRYPTED_CREDENTIALS: &str = "UFN_ENCRYPTED_CREDENTIALS";

/// Fatal configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable is present but unusable
    #[error("Invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },

    /// Credential decryption failed
    #[error("Credential decryption failed: {0}")]
    Decrypt(String),
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Source provider consumer key
    pub api_key: Sensitive<String>,
    /// Source provider consumer secret
    pub api_secret: Sensitive<String>,
    /// Store location identifier (SQLite path)
    pub store_path: String,
    /// Notification channel identifier
    pub channel: String,
    /// Optional region/locality identifier
    pub region: Option<String>,
    /// Whether the key/secret values are base64 ciphertext that must be
    /// resolved through a key-management call before use
    pub encrypted_credentials: bool,
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: Sensitive::new(require(ENV_API_KEY)?),
            api_secret: Sensitive::new(require(ENV_API_SECRET)?),
            store_path: require(ENV_STORE_PATH)?,
            channel: require(ENV_CHANNEL)?,
            region: optional(ENV_REGION),
            encrypted_credentials: parse_flag(ENV_ENCRYPTED_CREDENTIALS)?,
        })
    }

    /// Execute the one-shot secret-resolution step.
    ///
    /// When `encrypted_credentials` is set, both credential values are
    /// base64-decoded and passed through the resolver (the external
    /// key-management collaborator). Runs once at startup; the returned
    /// config holds plaintext credentials.
    pub fn resolve_secrets(self, resolver: &dyn SecretResolver) -> Result<Self, ConfigError> {
        if !self.encrypted_credentials {
            return Ok(self);
        }

        let api_key = resolve_one(resolver, ENV_API_KEY, self.api_key.expose())?;
        let api_secret = resolve_one(resolver, ENV_API_SECRET, self.api_secret.expose())?;

        Ok(Self {
            api_key: Sensitive::new(api_key),
            api_secret: Sensitive::new(api_secret),
            encrypted_credentials: false,
            ..self
        })
    }
}

fn resolve_one(
    resolver: &dyn SecretResolver,
    name: &'static str,
    encoded: &str,
) -> Result<String, ConfigError> {
    use base64::Engine as _;

    let ciphertext = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| ConfigError::InvalidVar {
            name,
            reason: format!("not valid base64 ciphertext: {}", e),
        })?;

    resolver.resolve(&ciphertext)
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn optional(name: &'static str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_flag(name: &'static str) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Err(_) => Ok(false),
        Ok(v) => match v.to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "no" => Ok(false),
            "1" | "true" | "yes" => Ok(true),
            other => Err(ConfigError::InvalidVar {
                name,
                reason: format!("expected a boolean, got '{}'", other),
            }),
        },
    }
}
