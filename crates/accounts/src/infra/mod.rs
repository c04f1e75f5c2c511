//! Infrastructure Layer
//!
//! Concrete implementations of the domain traits.

pub mod log_mailer;
pub mod memory;
pub mod postgres;

pub use log_mailer::LogMailer;
pub use memory::InMemoryAccountRepository;
pub use postgres::PgAccountRepository;
