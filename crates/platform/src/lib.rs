//! Platform Crate
//!
//! Cryptographic plumbing shared by the account crates. Contains no domain
//! knowledge: password hashing and opaque token generation only.
//!
//! ## Modules
//! - `password` - Argon2id password hashing with memory zeroization
//! - `token` - URL-safe random token generation

pub mod password;
pub mod token;
