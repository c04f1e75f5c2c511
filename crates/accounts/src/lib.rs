//! Accounts (User Account Subsystem) Module
//!
//! Clean Architecture structure:
//! - `schema/` - Input/output shapes and validation rules
//! - `domain/` - Entities, value objects, repository and mailer traits
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL and in-memory implementations
//!
//! ## Features
//! - Registration with hashed passwords and queued verification email
//! - Login with sticky lockout after repeated failures
//! - Email verification via one-time token
//! - Password reset, account unlock, paginated listing
//!
//! ## Security Model
//! - Passwords hashed with Argon2id; clear text zeroized and never stored
//! - Accounts lock after `max_login_attempts` consecutive failures and
//!   stay locked until explicitly unlocked
//! - Verification tokens are single-use and cleared on success

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod schema;


// Re-exports for convenience
pub use application::AccountConfig;
pub use error::{AccountError, AccountResult, ErrorKind};
pub use infra::{InMemoryAccountRepository, LogMailer, PgAccountRepository};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::schema::*;
}
