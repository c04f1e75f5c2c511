//! Lookup Use Case
//!
//! Single-record reads by id, email, or nickname.

use std::sync::Arc;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, UserId};
use crate::error::{AccountError, AccountResult};

/// Lookup use case
pub struct LookupUser<R>
where
    R: UserRepository,
{
    users: Arc<R>,
}

impl<R> LookupUser<R>
where
    R: UserRepository,
{
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    pub async fn by_id(&self, id: UserId) -> AccountResult<User> {
        self.users
            .find_by_id(&id)
            .await?
            .ok_or(AccountError::UserNotFound)
    }

    /// A malformed probe simply does not match any account.
    pub async fn by_email(&self, email: &str) -> AccountResult<User> {
        let email = Email::new(email).map_err(|_| AccountError::UserNotFound)?;
        self.users
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::UserNotFound)
    }

    pub async fn by_nickname(&self, nickname: &str) -> AccountResult<User> {
        self.users
            .find_by_nickname(nickname)
            .await?
            .ok_or(AccountError::UserNotFound)
    }
}
