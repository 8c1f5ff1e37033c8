//! Credentials Entity

use platform::crypto::constant_time_eq;

use crate::domain::value_object::{StoredPassword, UserId};

/// The secret half of an account
///
/// Kept separate from [`super::User`] so handlers that serialize a
/// profile cannot accidentally include the hash or the recovery answer.
#[derive(Clone)]
pub struct Credentials {
    pub user_id: UserId,
    pub password_hash: StoredPassword,
    pub security_answer: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("password_hash", &self.password_hash)
            .field("security_answer", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    pub fn new(user_id: UserId, password_hash: StoredPassword, security_answer: String) -> Self {
        Self {
            user_id,
            password_hash,
            security_answer,
        }
    }

    /// Compare a submitted recovery answer in constant time
    pub fn answer_matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.security_answer.as_bytes(), candidate.as_bytes())
    }

    /// Replace the password hash after a reset or profile change
    pub fn update_password(&mut self, new_hash: StoredPassword) {
        self.password_hash = new_hash;
    }
}
