//! Email Value Object
//!
//! A lightly validated, lowercased email address. Lookups are always
//! done against the normalized form so `User@Shop.COM` and
//! `user@shop.com` are the same account.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    ///
    /// Trims surrounding whitespace and lowercases before validating.
    pub fn new(email: impl Into<String>) -> Result<Self, AuthError> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(AuthError::Validation("Email is Required".to_string()));
        }

        if email.len() > EMAIL_MAX_LENGTH || !Self::looks_like_email(&email) {
            return Err(AuthError::Validation("Invalid email format".to_string()));
        }

        Ok(Self(email))
    }

    /// Shallow shape check, not full RFC 5322
    fn looks_like_email(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > 64 || domain.contains('@') {
            return false;
        }

        // Domain needs at least one dot and no leading/trailing separators
        domain.contains('.')
            && !domain.starts_with(['.', '-'])
            && !domain.ends_with(['.', '-'])
            && domain
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    }

    /// Wrap a value that was already validated at write time
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the stored form
    pub fn into_db(self) -> String {
        self.0
    }
}

impl FromStr for Email {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Email::new(s)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("buyer@shop.example").is_ok());
        assert!(Email::new("buyer+tag@shop.example").is_ok());
        assert!(Email::new("buyer.name@shop.co.uk").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("buyershop.example").is_err());
        assert!(Email::new("@shop.example").is_err());
        assert!(Email::new("buyer@").is_err());
        assert!(Email::new("buyer@shop").is_err());
        assert!(Email::new("buyer@@shop.example").is_err());
        assert!(Email::new("buyer@-shop.example").is_err());
    }

    #[test]
    fn test_email_normalized() {
        let email = Email::new("  Buyer@Shop.Example ").unwrap();
        assert_eq!(email.as_str(), "buyer@shop.example");
    }

    #[test]
    fn test_empty_email_message() {
        let err = Email::new("   ").unwrap_err();
        assert_eq!(err.to_string(), "Email is Required");
    }
}
