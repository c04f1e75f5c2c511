//! Update Use Case
//!
//! Partial profile updates. Omitted fields stay as they are; there is no
//! way to null a field out through this path.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::{AccountError, AccountResult};
use crate::schema::UserUpdate;

/// Update use case
pub struct UpdateUser<R>
where
    R: UserRepository,
{
    users: Arc<R>,
}

impl<R> UpdateUser<R>
where
    R: UserRepository,
{
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, id: UserId, input: UserUpdate) -> AccountResult<User> {
        let changes = input.into_validated()?;

        let Some(mut user) = self.users.find_by_id(&id).await? else {
            return Err(AccountError::UserNotFound);
        };

        if let Some(email) = changes.email {
            if email != user.email && self.users.exists_by_email(&email).await? {
                return Err(AccountError::EmailTaken);
            }
            user.email = email;
        }

        if let Some(nickname) = changes.nickname {
            if nickname != user.nickname && self.users.exists_by_nickname(nickname.as_str()).await?
            {
                return Err(AccountError::NicknameTaken);
            }
            user.nickname = nickname;
        }

        if let Some(first_name) = changes.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = changes.last_name {
            user.last_name = Some(last_name);
        }
        if let Some(bio) = changes.bio {
            user.bio = Some(bio);
        }
        if let Some(url) = changes.profile_picture_url {
            user.profile_picture_url = Some(url);
        }
        if let Some(url) = changes.linkedin_profile_url {
            user.linkedin_profile_url = Some(url);
        }
        if let Some(url) = changes.github_profile_url {
            user.github_profile_url = Some(url);
        }

        user.updated_at = Utc::now();
        self.users.update(&user).await?;

        tracing::info!(user_id = %user.id, "user profile updated");

        Ok(user)
    }
}
