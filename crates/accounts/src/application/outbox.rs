//! Outbox Dispatch Use Case
//!
//! Drains pending outbox entries through a mailer. Each entry ends up
//! Sent or Failed with the error recorded, never silently dropped.

use std::sync::Arc;

use crate::domain::mailer::Mailer;
use crate::domain::repository::OutboxRepository;
use crate::error::AccountResult;

/// Outbox dispatch use case
pub struct DispatchOutbox<O, M>
where
    O: OutboxRepository,
    M: Mailer,
{
    outbox: Arc<O>,
    mailer: Arc<M>,
}

impl<O, M> DispatchOutbox<O, M>
where
    O: OutboxRepository,
    M: Mailer,
{
    pub fn new(outbox: Arc<O>, mailer: Arc<M>) -> Self {
        Self { outbox, mailer }
    }

    /// Attempt delivery for up to `limit` pending entries; returns the
    /// number delivered.
    pub async fn execute(&self, limit: i64) -> AccountResult<u32> {
        let pending = self.outbox.list_pending(limit).await?;
        let mut sent = 0;

        for mut entry in pending {
            match self.mailer.send(&entry).await {
                Ok(()) => {
                    entry.mark_sent();
                    sent += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        outbox_id = %entry.id,
                        recipient = %entry.recipient,
                        error = %e,
                        "email delivery failed"
                    );
                    entry.mark_failed(&e.to_string());
                }
            }
            self.outbox.update(&entry).await?;
        }

        if sent > 0 {
            tracing::info!(sent, "outbox entries delivered");
        }

        Ok(sent)
    }
}
