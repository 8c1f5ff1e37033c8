//! Shared Kernel - Domain-crossing minimal core
//!
//! The smallest vocabulary shared by every crate in the workspace:
//! - Unified error type ([`error::app_error::AppError`]) and result aliases
//! - Typed ID wrappers for domain entities
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
