//! Mailer Trait
//!
//! Contract for outbound email delivery. The actual SMTP transport is an
//! external collaborator; this crate ships only a logging implementation
//! for development and tests (see `infra::LogMailer`).

use thiserror::Error;

use crate::domain::entity::EmailOutbox;

/// Delivery failure reported by a mailer
#[derive(Debug, Clone, Error)]
#[error("mail delivery failed: {0}")]
pub struct MailerError(pub String);

/// Outbound email transport
#[trait_variant::make(Mailer: Send)]
pub trait LocalMailer {
    /// Attempt delivery of a single outbox entry.
    async fn send(&self, email: &EmailOutbox) -> Result<(), MailerError>;
}
