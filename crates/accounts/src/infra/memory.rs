//! In-Memory Repository Implementation
//!
//! Backs the use-case tests and local development. Enforces the same
//! unique email/nickname constraints the database schema does, so the
//! typed conflict errors behave identically across backends.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::domain::entity::{EmailOutbox, OutboxStatus, User};
use crate::domain::repository::{OutboxRepository, UserRepository};
use crate::domain::value_object::{Email, UserId};
use crate::error::{AccountError, AccountResult};

/// In-memory account repository
#[derive(Default)]
pub struct InMemoryAccountRepository {
    users: RwLock<HashMap<Uuid, User>>,
    outbox: RwLock<Vec<EmailOutbox>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every outbox entry regardless of status. Lets tests and
    /// diagnostics observe Sent/Failed entries, which the repository trait
    /// deliberately does not expose.
    pub fn outbox_snapshot(&self) -> Vec<EmailOutbox> {
        self.outbox
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    fn read_users(&self) -> AccountResult<std::sync::RwLockReadGuard<'_, HashMap<Uuid, User>>> {
        self.users
            .read()
            .map_err(|_| AccountError::Internal("user store lock poisoned".to_string()))
    }

    fn write_users(&self) -> AccountResult<std::sync::RwLockWriteGuard<'_, HashMap<Uuid, User>>> {
        self.users
            .write()
            .map_err(|_| AccountError::Internal("user store lock poisoned".to_string()))
    }

    fn read_outbox(&self) -> AccountResult<std::sync::RwLockReadGuard<'_, Vec<EmailOutbox>>> {
        self.outbox
            .read()
            .map_err(|_| AccountError::Internal("outbox lock poisoned".to_string()))
    }

    fn write_outbox(&self) -> AccountResult<std::sync::RwLockWriteGuard<'_, Vec<EmailOutbox>>> {
        self.outbox
            .write()
            .map_err(|_| AccountError::Internal("outbox lock poisoned".to_string()))
    }
}

impl UserRepository for InMemoryAccountRepository {
    async fn create(&self, user: &User) -> AccountResult<()> {
        let mut users = self.write_users()?;

        if users.values().any(|u| u.email == user.email) {
            return Err(AccountError::EmailTaken);
        }
        if users.values().any(|u| u.nickname == user.nickname) {
            return Err(AccountError::NicknameTaken);
        }

        users.insert(user.id.into_uuid(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> AccountResult<Option<User>> {
        Ok(self.read_users()?.get(id.as_uuid()).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>> {
        Ok(self
            .read_users()?
            .values()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn find_by_nickname(&self, nickname: &str) -> AccountResult<Option<User>> {
        Ok(self
            .read_users()?
            .values()
            .find(|u| u.nickname.as_str() == nickname)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        Ok(self.read_users()?.values().any(|u| u.email == *email))
    }

    async fn exists_by_nickname(&self, nickname: &str) -> AccountResult<bool> {
        Ok(self
            .read_users()?
            .values()
            .any(|u| u.nickname.as_str() == nickname))
    }

    async fn update(&self, user: &User) -> AccountResult<()> {
        let mut users = self.write_users()?;

        if !users.contains_key(user.id.as_uuid()) {
            return Err(AccountError::UserNotFound);
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(AccountError::EmailTaken);
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.nickname == user.nickname)
        {
            return Err(AccountError::NicknameTaken);
        }

        users.insert(user.id.into_uuid(), user.clone());
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> AccountResult<bool> {
        Ok(self.write_users()?.remove(id.as_uuid()).is_some())
    }

    async fn list(&self, skip: i64, limit: i64) -> AccountResult<Vec<User>> {
        let users = self.read_users()?;

        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });

        Ok(all
            .into_iter()
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count(&self) -> AccountResult<i64> {
        Ok(self.read_users()?.len() as i64)
    }
}

impl OutboxRepository for InMemoryAccountRepository {
    async fn append(&self, entry: &EmailOutbox) -> AccountResult<()> {
        self.write_outbox()?.push(entry.clone());
        Ok(())
    }

    async fn list_pending(&self, limit: i64) -> AccountResult<Vec<EmailOutbox>> {
        Ok(self
            .read_outbox()?
            .iter()
            .filter(|e| e.status == OutboxStatus::Pending)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, entry: &EmailOutbox) -> AccountResult<()> {
        let mut outbox = self.write_outbox()?;
        match outbox.iter_mut().find(|e| e.id == entry.id) {
            Some(slot) => {
                *slot = entry.clone();
                Ok(())
            }
            None => Err(AccountError::Internal(format!(
                "outbox entry {} not found",
                entry.id
            ))),
        }
    }
}
