//! Unlock Use Case
//!
//! Explicit administrative unlock; the only way out of the locked state.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::AccountResult;

/// Unlock use case
pub struct UnlockAccount<R>
where
    R: UserRepository,
{
    users: Arc<R>,
}

impl<R> UnlockAccount<R>
where
    R: UserRepository,
{
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    /// Returns true iff the account existed and was locked. Unlocking an
    /// already-unlocked account is a no-op reported as false.
    pub async fn execute(&self, id: UserId) -> AccountResult<bool> {
        let Some(mut user) = self.users.find_by_id(&id).await? else {
            return Ok(false);
        };

        if !user.is_locked {
            return Ok(false);
        }

        user.unlock();
        self.users.update(&user).await?;

        tracing::info!(user_id = %user.id, "account unlocked");

        Ok(true)
    }
}
