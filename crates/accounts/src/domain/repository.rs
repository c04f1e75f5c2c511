//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer.

use crate::domain::entity::{EmailOutbox, User};
use crate::domain::value_object::{Email, UserId};
use crate::error::AccountResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user
    async fn create(&self, user: &User) -> AccountResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: &UserId) -> AccountResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>>;

    /// Find user by nickname. Takes a raw string so arbitrary probes simply
    /// come back empty instead of failing validation.
    async fn find_by_nickname(&self, nickname: &str) -> AccountResult<Option<User>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool>;

    /// Check if a nickname is already taken
    async fn exists_by_nickname(&self, nickname: &str) -> AccountResult<bool>;

    /// Update an existing user
    async fn update(&self, user: &User) -> AccountResult<()>;

    /// Delete a user; true if a row was removed
    async fn delete(&self, id: &UserId) -> AccountResult<bool>;

    /// List users ordered by creation (then id), with offset pagination
    async fn list(&self, skip: i64, limit: i64) -> AccountResult<Vec<User>>;

    /// Total number of users
    async fn count(&self) -> AccountResult<i64>;
}

/// Email outbox repository trait
#[trait_variant::make(OutboxRepository: Send)]
pub trait LocalOutboxRepository {
    /// Append a new outbox entry
    async fn append(&self, entry: &EmailOutbox) -> AccountResult<()>;

    /// Fetch entries still awaiting delivery, oldest first
    async fn list_pending(&self, limit: i64) -> AccountResult<Vec<EmailOutbox>>;

    /// Persist a status transition
    async fn update(&self, entry: &EmailOutbox) -> AccountResult<()>;
}
