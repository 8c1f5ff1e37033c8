//! Client Auth State
//!
//! Holds the signed-in profile and access token, mirrored to storage
//! under the `auth` key so a restart picks up where the last session
//! left off.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::storage::{AUTH_STORAGE_KEY, Storage, StorageError};

/// Profile fields the API returns on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: i16,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == 1
    }
}

/// The persisted auth blob
///
/// `Default` is the signed-out state: no user, empty token. Unknown or
/// corrupt stored JSON hydrates to this instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSnapshot {
    pub user: Option<UserProfile>,
    pub token: String,
}

impl AuthSnapshot {
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Auth state container
///
/// Single owner of the client's auth state. Every mutation goes
/// through here and is written back to storage in the same call, so
/// the persisted copy never drifts from the in-memory one.
pub struct AuthStore<S: Storage> {
    storage: S,
    snapshot: Mutex<AuthSnapshot>,
}

impl<S: Storage> AuthStore<S> {
    /// Create a store and hydrate it from storage
    pub fn hydrate(storage: S) -> Result<Self, StorageError> {
        let snapshot = match storage.load(AUTH_STORAGE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Stored auth state is corrupt, starting signed out");
                AuthSnapshot::default()
            }),
            None => AuthSnapshot::default(),
        };

        Ok(Self {
            storage,
            snapshot: Mutex::new(snapshot),
        })
    }

    /// Record a successful login
    pub fn sign_in(&self, user: UserProfile, token: String) -> Result<(), StorageError> {
        let snapshot = AuthSnapshot {
            user: Some(user),
            token,
        };
        self.persist(&snapshot)?;
        *self.snapshot.lock().unwrap() = snapshot;
        Ok(())
    }

    /// Drop the session and wipe the stored copy
    pub fn sign_out(&self) -> Result<(), StorageError> {
        self.storage.clear(AUTH_STORAGE_KEY)?;
        *self.snapshot.lock().unwrap() = AuthSnapshot::default();
        Ok(())
    }

    /// Replace the stored profile after a profile update
    pub fn update_profile(&self, user: UserProfile) -> Result<(), StorageError> {
        let mut snapshot = self.snapshot.lock().unwrap().clone();
        snapshot.user = Some(user);
        self.persist(&snapshot)?;
        *self.snapshot.lock().unwrap() = snapshot;
        Ok(())
    }

    /// Current state, by value
    pub fn snapshot(&self) -> AuthSnapshot {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.lock().unwrap().is_authenticated()
    }

    /// Value for the `Authorization` header, `None` when signed out
    pub fn auth_header(&self) -> Option<String> {
        let snapshot = self.snapshot.lock().unwrap();
        if snapshot.token.is_empty() {
            None
        } else {
            Some(snapshot.token.clone())
        }
    }

    fn persist(&self, snapshot: &AuthSnapshot) -> Result<(), StorageError> {
        // AuthSnapshot serialization cannot fail
        let raw = serde_json::to_string(snapshot).expect("auth snapshot serializes");
        self.storage.save(AUTH_STORAGE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn profile() -> UserProfile {
        UserProfile {
            user_id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@shop.example".to_string(),
            phone: "555-0100".to_string(),
            address: "1 Analytical Way".to_string(),
            role: 0,
        }
    }

    #[test]
    fn test_fresh_store_is_signed_out() {
        let store = AuthStore::hydrate(MemoryStorage::new()).unwrap();
        assert!(!store.is_authenticated());
        assert!(store.auth_header().is_none());
    }

    #[test]
    fn test_sign_in_persists_and_sign_out_wipes() {
        let storage = MemoryStorage::new();
        let store = AuthStore::hydrate(storage).unwrap();

        store.sign_in(profile(), "tok-123".to_string()).unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.auth_header().as_deref(), Some("tok-123"));

        store.sign_out().unwrap();
        assert!(!store.is_authenticated());
        assert!(store.snapshot().user.is_none());
    }

    #[test]
    fn test_hydrate_roundtrip() {
        let storage = MemoryStorage::new();
        {
            let store = AuthStore::hydrate(&storage).unwrap();
            store.sign_in(profile(), "tok-123".to_string()).unwrap();
        }

        let store = AuthStore::hydrate(&storage).unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.token, "tok-123");
        assert_eq!(snapshot.user.unwrap().name, "Ada");
    }

    #[test]
    fn test_hydrate_corrupt_json_starts_signed_out() {
        let storage = MemoryStorage::new();
        storage.save(AUTH_STORAGE_KEY, "{not json").unwrap();

        let store = AuthStore::hydrate(storage).unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_admin_flag() {
        assert!(!profile().is_admin());
        assert!(UserProfile { role: 1, ..profile() }.is_admin());
    }
}
