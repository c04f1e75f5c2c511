//! Account Error Types
//!
//! Every service operation returns `AccountResult<T>` so that callers can
//! branch on the outcome instead of inspecting logs. [`AccountError::kind`]
//! collapses the variants into the coarse [`ErrorKind`] classification.

use thiserror::Error;

use crate::schema::ValidationError;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Coarse outcome classification for account operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input failed schema or field validation
    Invalid,
    /// Requested entity does not exist
    NotFound,
    /// Unique email/nickname constraint would be violated
    Conflict,
    /// Wrong password, unknown account, or unverified email
    Unauthorized,
    /// Account is locked
    Locked,
    /// Storage or invariant failure
    Internal,
}

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Email already registered
    #[error("Email already registered")]
    EmailTaken,

    /// Nickname already taken
    #[error("Nickname already taken")]
    NicknameTaken,

    /// Input validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Account email has not been verified yet
    #[error("Email address is not verified")]
    EmailNotVerified,

    /// Account is locked after too many failed attempts
    #[error("Account is locked")]
    AccountLocked,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the outcome classification for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::UserNotFound => ErrorKind::NotFound,
            AccountError::EmailTaken | AccountError::NicknameTaken => ErrorKind::Conflict,
            AccountError::Validation(_) => ErrorKind::Invalid,
            AccountError::InvalidCredentials | AccountError::EmailNotVerified => {
                ErrorKind::Unauthorized
            }
            AccountError::AccountLocked => ErrorKind::Locked,
            AccountError::Database(_) | AccountError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// True for conflicts caused by the unique email/nickname constraints
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(AccountError::UserNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(AccountError::EmailTaken.kind(), ErrorKind::Conflict);
        assert_eq!(AccountError::NicknameTaken.kind(), ErrorKind::Conflict);
        assert_eq!(
            AccountError::InvalidCredentials.kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            AccountError::EmailNotVerified.kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(AccountError::AccountLocked.kind(), ErrorKind::Locked);
        assert_eq!(
            AccountError::Internal("boom".to_string()).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_conflict_helper() {
        assert!(AccountError::EmailTaken.is_conflict());
        assert!(!AccountError::UserNotFound.is_conflict());
    }
}
