//! Email Outbox Entity
//!
//! Persisted record of an email the system intends to send. Replaces
//! fire-and-forget delivery: failures are recorded and retryable instead of
//! silently swallowed, and at-most-once semantics fall out of the status
//! transitions rather than mailer behavior.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::value_object::{Email, UserId};

/// Delivery status of an outbox entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i16)]
pub enum OutboxStatus {
    #[default]
    Pending = 0,
    Sent = 1,
    Failed = 2,
}

impl OutboxStatus {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Pending),
            1 => Some(Self::Sent),
            2 => Some(Self::Failed),
            _ => None,
        }
    }
}

/// A queued outbound email
#[derive(Debug, Clone)]
pub struct EmailOutbox {
    pub id: Uuid,
    pub user_id: UserId,
    pub recipient: Email,
    pub subject: String,
    pub body: String,
    pub status: OutboxStatus,
    /// Delivery attempts so far (successful or not)
    pub attempts: u32,
    pub last_error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
}

impl EmailOutbox {
    fn new(user_id: UserId, recipient: Email, subject: String, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            recipient,
            subject,
            body,
            status: OutboxStatus::Pending,
            attempts: 0,
            last_error: None,
            created_at: Utc::now(),
            sent_at: None,
        }
    }

    /// Compose the verification email for a freshly registered user.
    ///
    /// Returns `None` if the user carries no verification token (already
    /// verified), in which case there is nothing to send.
    pub fn verification(user: &User) -> Option<Self> {
        let token = user.verification_token.as_deref()?;
        let subject = "Verify your account".to_string();
        let body = format!(
            "Hi {},\n\nPlease verify your account by following:\n\n\
             /verify-email/{}/{}\n",
            user.nickname, user.id, token,
        );
        Some(Self::new(user.id, user.email.clone(), subject, body))
    }

    /// Mark this entry as delivered.
    pub fn mark_sent(&mut self) {
        self.status = OutboxStatus::Sent;
        self.attempts += 1;
        self.last_error = None;
        self.sent_at = Some(Utc::now());
    }

    /// Record a delivery failure. The entry stays retryable.
    pub fn mark_failed(&mut self, error: &str) {
        self.status = OutboxStatus::Failed;
        self.attempts += 1;
        self.last_error = Some(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{Nickname, PasswordHash, RawPassword};

    fn registered_user() -> User {
        let email = Email::new("new@example.com").unwrap();
        let nickname = Nickname::new("fresh_user").unwrap();
        let raw = RawPassword::new("FreshStart1!".to_string()).unwrap();
        let hash = PasswordHash::from_raw(&raw).unwrap();
        User::new(email, nickname, hash)
    }

    #[test]
    fn test_verification_email_contents() {
        let user = registered_user();
        let token = user.verification_token.clone().unwrap();

        let entry = EmailOutbox::verification(&user).unwrap();
        assert_eq!(entry.recipient.as_str(), "new@example.com");
        assert_eq!(entry.status, OutboxStatus::Pending);
        assert_eq!(entry.attempts, 0);
        assert!(entry.body.contains(&token));
        assert!(entry.body.contains(&user.id.to_string()));
    }

    #[test]
    fn test_no_email_for_verified_user() {
        let mut user = registered_user();
        let token = user.verification_token.clone().unwrap();
        user.verify_email(&token);

        assert!(EmailOutbox::verification(&user).is_none());
    }

    #[test]
    fn test_status_transitions() {
        let user = registered_user();
        let mut entry = EmailOutbox::verification(&user).unwrap();

        entry.mark_failed("connection refused");
        assert_eq!(entry.status, OutboxStatus::Failed);
        assert_eq!(entry.attempts, 1);
        assert_eq!(entry.last_error.as_deref(), Some("connection refused"));
        assert!(entry.sent_at.is_none());

        entry.mark_sent();
        assert_eq!(entry.status, OutboxStatus::Sent);
        assert_eq!(entry.attempts, 2);
        assert!(entry.last_error.is_none());
        assert!(entry.sent_at.is_some());
    }

    #[test]
    fn test_outbox_status_ids() {
        for status in [OutboxStatus::Pending, OutboxStatus::Sent, OutboxStatus::Failed] {
            assert_eq!(OutboxStatus::from_id(status.id()), Some(status));
        }
        assert_eq!(OutboxStatus::from_id(9), None);
    }
}
