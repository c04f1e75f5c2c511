//! Register Use Case
//!
//! Creates a new user account and queues the verification email.

use std::sync::Arc;

use crate::domain::entity::{EmailOutbox, User};
use crate::domain::repository::{OutboxRepository, UserRepository};
use crate::domain::value_object::{Nickname, PasswordHash};
use crate::error::{AccountError, AccountResult};
use crate::schema::UserCreate;

/// Register (create) use case
///
/// `execute` and `register` share one contract; callers speak in both
/// creation and registration terms.
pub struct RegisterUser<R, O>
where
    R: UserRepository,
    O: OutboxRepository,
{
    users: Arc<R>,
    outbox: Arc<O>,
}

impl<R, O> RegisterUser<R, O>
where
    R: UserRepository,
    O: OutboxRepository,
{
    pub fn new(users: Arc<R>, outbox: Arc<O>) -> Self {
        Self { users, outbox }
    }

    pub async fn execute(&self, input: UserCreate) -> AccountResult<User> {
        let new_account = input.into_validated()?;

        if self.users.exists_by_email(&new_account.email).await? {
            return Err(AccountError::EmailTaken);
        }

        let nickname = match new_account.nickname {
            Some(nickname) => {
                if self.users.exists_by_nickname(nickname.as_str()).await? {
                    return Err(AccountError::NicknameTaken);
                }
                nickname
            }
            None => self.generate_free_nickname().await?,
        };

        let password_hash = PasswordHash::from_raw(&new_account.password)
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        let mut user = User::new(new_account.email, nickname, password_hash);
        user.first_name = new_account.first_name;
        user.last_name = new_account.last_name;
        user.bio = new_account.bio;
        user.profile_picture_url = new_account.profile_picture_url;
        user.linkedin_profile_url = new_account.linkedin_profile_url;
        user.github_profile_url = new_account.github_profile_url;

        self.users.create(&user).await?;

        // Queue the verification email after the account exists. A failed
        // append is not allowed to roll back the registration; the entry is
        // simply missing and the failure is visible in the logs.
        if let Some(email) = EmailOutbox::verification(&user) {
            if let Err(e) = self.outbox.append(&email).await {
                tracing::error!(
                    user_id = %user.id,
                    error = %e,
                    "failed to queue verification email"
                );
            }
        }

        tracing::info!(
            user_id = %user.id,
            nickname = %user.nickname,
            "user registered"
        );

        Ok(user)
    }

    /// Alias for [`execute`](Self::execute) with the identical contract.
    pub async fn register(&self, input: UserCreate) -> AccountResult<User> {
        self.execute(input).await
    }

    /// Draw generated nicknames until one is free.
    async fn generate_free_nickname(&self) -> AccountResult<Nickname> {
        loop {
            let candidate = Nickname::generate();
            if !self.users.exists_by_nickname(candidate.as_str()).await? {
                return Ok(candidate);
            }
        }
    }
}
