//! User Password Value Objects
//!
//! Thin domain wrappers over the platform password primitives. The
//! domain layer never sees clear text bytes or PHC internals, only
//! these two types.

use platform::password::{ClearTextPassword, HashedPassword};

use crate::error::AuthError;

/// A clear text password received from a request
///
/// Construction enforces the password policy; the inner buffer is
/// zeroized on drop.
#[derive(Debug)]
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate and wrap a clear text password
    pub fn new(raw: String) -> Result<Self, AuthError> {
        Ok(Self(ClearTextPassword::new(raw)?))
    }

    /// Hash into the storable form
    pub fn into_stored(self, pepper: Option<&[u8]>) -> Result<StoredPassword, AuthError> {
        Ok(StoredPassword(self.0.hash(pepper)?))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

/// An Argon2id password hash as persisted in the credentials table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPassword(HashedPassword);

impl StoredPassword {
    /// Wrap a PHC string loaded from storage
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, AuthError> {
        Ok(Self(HashedPassword::from_phc_string(s)?))
    }

    /// The PHC string for persistence
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a clear text password against this hash
    pub fn matches(&self, candidate: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(candidate.inner(), pepper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_rejected() {
        let err = RawPassword::new("12345".to_string()).unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[test]
    fn test_hash_and_match() {
        let raw = RawPassword::new("hunter42".to_string()).unwrap();
        let stored = RawPassword::new("hunter42".to_string())
            .unwrap()
            .into_stored(None)
            .unwrap();

        assert!(stored.matches(&raw, None));

        let wrong = RawPassword::new("hunter43".to_string()).unwrap();
        assert!(!stored.matches(&wrong, None));
    }

    #[test]
    fn test_phc_roundtrip() {
        let stored = RawPassword::new("hunter42".to_string())
            .unwrap()
            .into_stored(None)
            .unwrap();

        let reloaded = StoredPassword::from_phc_string(stored.as_phc_string()).unwrap();
        assert_eq!(stored, reloaded);
    }
}
