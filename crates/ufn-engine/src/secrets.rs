//! Secret resolution seam
//!
//! The external key-management collaborator sits behind `SecretResolver`.
//! Resolution runs exactly once, at startup, via
//! [`crate::config::Config::resolve_secrets`].

use crate::config::ConfigError;

/// Decrypts credential ciphertext through an external key-management call
pub trait SecretResolver {
    /// Resolve ciphertext bytes to a plaintext secret
    ///
    /// # Errors
    ///
    /// - `Decrypt` - the key-management call failed or the ciphertext is
    ///   not decryptable; fatal, never retried
    fn resolve(&self, ciphertext: &[u8]) -> Result<String, ConfigError>;
}

/// Identity resolver for deployments without encrypted credentials
///
/// Treats the "ciphertext" as UTF-8 plaintext. Real deployments supply a
/// resolver backed by their key-management service.
pub struct NoopResolver;

impl SecretResolver for NoopResolver {
    fn resolve(&self, ciphertext: &[u8]) -> Result<String, ConfigError> {
        String::from_utf8(ciphertext.to_vec())
            .map_err(|e| ConfigError::Decrypt(format!("plaintext is not valid UTF-8: {}", e)))
    }
}
