//! Domain Entities

pub mod email_outbox;
pub mod user;

pub use email_outbox::{EmailOutbox, OutboxStatus};
pub use user::User;
