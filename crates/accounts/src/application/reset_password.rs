//! Reset Password Use Case
//!
//! Rehashes and stores a new password. A reset also clears the failure
//! counter and the lock flag, so a user who recovers their account is not
//! still locked out of it.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::{PasswordHash, RawPassword, UserId};
use crate::error::{AccountError, AccountResult};

/// Reset password use case
pub struct ResetPassword<R>
where
    R: UserRepository,
{
    users: Arc<R>,
}

impl<R> ResetPassword<R>
where
    R: UserRepository,
{
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    /// Returns true on success, false if the user does not exist. A
    /// password that fails the complexity policy is a validation error.
    pub async fn execute(&self, id: UserId, new_password: String) -> AccountResult<bool> {
        let raw = RawPassword::new(new_password)
            .map_err(|e| crate::schema::ValidationError::new(e.to_string()))?;

        let Some(mut user) = self.users.find_by_id(&id).await? else {
            return Ok(false);
        };

        let password_hash =
            PasswordHash::from_raw(&raw).map_err(|e| AccountError::Internal(e.to_string()))?;

        user.set_password(password_hash);
        user.unlock();
        self.users.update(&user).await?;

        tracing::info!(user_id = %user.id, "password reset");

        Ok(true)
    }
}
