//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, PHC strings, zeroized input)
//! - Small cryptographic helpers (random bytes, constant-time compare)
//! - Bearer credential extraction from HTTP headers

pub mod bearer;
pub mod crypto;
pub mod password;
