//! Logging Mailer
//!
//! Development/test mailer that emits a tracing event instead of speaking
//! SMTP. Real delivery is wired in by the embedding application.

use crate::domain::entity::EmailOutbox;
use crate::domain::mailer::{Mailer, MailerError};

/// Mailer that logs instead of sending
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

impl Mailer for LogMailer {
    async fn send(&self, email: &EmailOutbox) -> Result<(), MailerError> {
        tracing::info!(
            recipient = %email.recipient,
            subject = %email.subject,
            "email dispatched (log mailer)"
        );
        Ok(())
    }
}
