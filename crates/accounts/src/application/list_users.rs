//! List Use Case
//!
//! Offset/limit pagination over the user table with a stable order, so
//! consecutive pages never overlap.

use std::sync::Arc;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::AccountResult;
use crate::schema::UserListResponse;

/// List use case
pub struct ListUsers<R>
where
    R: UserRepository,
{
    users: Arc<R>,
}

impl<R> ListUsers<R>
where
    R: UserRepository,
{
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    /// Fetch one page of users.
    pub async fn execute(&self, skip: i64, limit: i64) -> AccountResult<Vec<User>> {
        self.users.list(skip, limit).await
    }

    /// Fetch one page together with the pagination envelope.
    pub async fn page(&self, skip: i64, limit: i64) -> AccountResult<UserListResponse> {
        let users = self.users.list(skip, limit).await?;
        let total = self.users.count().await?;
        Ok(UserListResponse::paginate(&users, total, skip, limit))
    }
}
