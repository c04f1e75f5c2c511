//! Verify Email Use Case
//!
//! Marks an account verified when the presented token matches the stored
//! one-time token.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::AccountResult;

/// Email verification use case
pub struct VerifyEmail<R>
where
    R: UserRepository,
{
    users: Arc<R>,
}

impl<R> VerifyEmail<R>
where
    R: UserRepository,
{
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    /// Returns true only on an exact token match; any mismatch (unknown
    /// user, wrong or already-consumed token) returns false without
    /// mutating anything.
    pub async fn execute(&self, id: UserId, token: &str) -> AccountResult<bool> {
        let Some(mut user) = self.users.find_by_id(&id).await? else {
            return Ok(false);
        };

        if !user.verify_email(token) {
            return Ok(false);
        }

        self.users.update(&user).await?;

        tracing::info!(user_id = %user.id, "email verified");

        Ok(true)
    }
}
