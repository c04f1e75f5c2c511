//! Delete Use Case
//!
//! Permanent removal; there is no soft delete.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::AccountResult;

/// Delete use case
pub struct DeleteUser<R>
where
    R: UserRepository,
{
    users: Arc<R>,
}

impl<R> DeleteUser<R>
where
    R: UserRepository,
{
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    /// Returns true iff a record existed and was removed.
    pub async fn execute(&self, id: UserId) -> AccountResult<bool> {
        let deleted = self.users.delete(&id).await?;
        if deleted {
            tracing::info!(user_id = %id, "user deleted");
        }
        Ok(deleted)
    }
}
