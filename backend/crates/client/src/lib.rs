//! Client Crate
//!
//! Client-side auth plumbing for storefront frontends: persisted auth
//! state (profile + token under the `auth` storage key), and a route
//! guard that verifies the token against the API before rendering a
//! protected page.

pub mod guard;
pub mod state;
pub mod storage;

pub use guard::{AuthVerifier, GuardStatus, RouteGuard, REDIRECT_COUNTDOWN_SECS};
pub use state::{AuthSnapshot, AuthStore, UserProfile};
pub use storage::{AUTH_STORAGE_KEY, FileStorage, MemoryStorage, Storage, StorageError};
