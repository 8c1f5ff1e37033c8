//! Auth Crate
//!
//! Account management for the storefront: registration, login,
//! recovery-answer password reset, profile updates, token-gated route
//! checks, and the thin order views the account pages need.
//!
//! Layered clean-architecture style:
//! - `domain`: entities, value objects, repository ports
//! - `application`: use cases and token issuing
//! - `infra`: PostgreSQL and in-memory repository implementations
//! - `presentation`: axum handlers, middleware, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::MemoryShopRepository;
pub use infra::postgres::PgShopRepository;
pub use presentation::router::{auth_router, auth_router_generic};
