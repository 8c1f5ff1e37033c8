//! Application Configuration
//!
//! Configuration for the auth application layer.

use std::fmt;
use std::time::Duration;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for access token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Access token lifetime (1 week)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(7 * 24 * 3600),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret
    ///
    /// Tokens do not survive a restart with this constructor. Deploys
    /// should load a fixed secret from the environment instead.
    pub fn with_random_secret() -> Self {
        let bytes = platform::crypto::random_bytes(32);
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&bytes);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Access token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
