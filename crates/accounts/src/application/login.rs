//! Login Use Case
//!
//! Authenticates a user and drives the lockout state machine.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Email;
use crate::error::{AccountError, AccountResult};
use crate::schema::LoginRequest;

/// Login use case
pub struct Login<R>
where
    R: UserRepository,
{
    users: Arc<R>,
    config: Arc<AccountConfig>,
}

impl<R> Login<R>
where
    R: UserRepository,
{
    pub fn new(users: Arc<R>, config: Arc<AccountConfig>) -> Self {
        Self { users, config }
    }

    /// Attempt a login.
    ///
    /// Check order matters: the lock is sticky and rejects even a correct
    /// password, and a wrong password on an unlocked account advances the
    /// failure counter toward the threshold.
    pub async fn execute(&self, request: LoginRequest) -> AccountResult<User> {
        // A malformed email cannot belong to an account; treat it like an
        // unknown one rather than a validation failure.
        let email =
            Email::new(request.email.as_str()).map_err(|_| AccountError::InvalidCredentials)?;

        let Some(mut user) = self.users.find_by_email(&email).await? else {
            tracing::warn!(email = %email, "login attempt for unknown email");
            return Err(AccountError::InvalidCredentials);
        };

        if !user.email_verified {
            return Err(AccountError::EmailNotVerified);
        }

        if user.is_locked {
            tracing::warn!(user_id = %user.id, "login attempt on locked account");
            return Err(AccountError::AccountLocked);
        }

        if !user.password_hash.verify(&request.password) {
            user.record_failed_login(self.config.max_login_attempts);
            self.users.update(&user).await?;

            if user.is_locked {
                tracing::warn!(
                    user_id = %user.id,
                    attempts = user.failed_login_count,
                    "account locked after repeated failures"
                );
            }
            return Err(AccountError::InvalidCredentials);
        }

        user.record_login();
        self.users.update(&user).await?;

        tracing::info!(user_id = %user.id, "user logged in");

        Ok(user)
    }

    /// Report the current lock state for an email. Unknown or malformed
    /// emails read as unlocked.
    pub async fn is_account_locked(&self, email: &str) -> AccountResult<bool> {
        let Ok(email) = Email::new(email) else {
            return Ok(false);
        };

        let user = self.users.find_by_email(&email).await?;
        Ok(user.map(|u| u.is_locked).unwrap_or(false))
    }
}
