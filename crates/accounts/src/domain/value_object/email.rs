//! Email Value Object
//!
//! Syntactic validation only. Whether the mailbox actually exists is
//! established separately through the verification-token flow.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum length of the local part (before the `@`)
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Email validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    /// Email is empty after trimming
    #[error("Email cannot be empty")]
    Empty,

    /// Email exceeds the RFC length limit
    #[error("Email must be at most {EMAIL_MAX_LENGTH} characters")]
    TooLong,

    /// Email does not look like `local@domain.tld`
    #[error("Invalid email format")]
    InvalidFormat,
}

/// Validated, lowercased email address
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new email with validation.
    ///
    /// Input is trimmed and lowercased; the canonical lowercase form is what
    /// gets stored and compared for uniqueness.
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(EmailError::TooLong);
        }

        if !Self::is_valid_format(&email) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(email))
    }

    fn is_valid_format(email: &str) -> bool {
        // Exactly one @
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        if domain.contains('@') {
            return false;
        }

        if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH {
            return false;
        }

        // Domain must be dotted and restricted to hostname characters
        if domain.is_empty() || !domain.contains('.') {
            return false;
        }
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }
        if domain.starts_with('.')
            || domain.ends_with('.')
            || domain.starts_with('-')
            || domain.ends_with('-')
        {
            return false;
        }

        true
    }

    /// Restore from storage (assumed already validated)
    pub fn from_trusted(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to the owned canonical string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, EmailError> {
        Email::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, EmailError> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("  spaced@example.com  ").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(Email::new(""), Err(EmailError::Empty));
        assert_eq!(Email::new("invalid-email"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("invalidemail"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user@"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("@example.com"), Err(EmailError::InvalidFormat));
        assert_eq!(
            Email::new("user@@example.com"),
            Err(EmailError::InvalidFormat)
        );
        assert_eq!(Email::new("user@example"), Err(EmailError::InvalidFormat));
        assert_eq!(
            Email::new("user@.example.com"),
            Err(EmailError::InvalidFormat)
        );
    }

    #[test]
    fn test_lowercase_normalization() {
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_length_limits() {
        let long_local = format!("{}@example.com", "a".repeat(65));
        assert_eq!(Email::new(long_local), Err(EmailError::InvalidFormat));

        let too_long = format!("user@{}.com", "a".repeat(260));
        assert_eq!(Email::new(too_long), Err(EmailError::TooLong));
    }

    #[test]
    fn test_serde_roundtrip() {
        let email = Email::new("user@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"user@example.com\"");

        let parsed: Email = serde_json::from_str("\"Other@Example.com\"").unwrap();
        assert_eq!(parsed.as_str(), "other@example.com");

        let invalid: Result<Email, _> = serde_json::from_str("\"nope\"");
        assert!(invalid.is_err());
    }
}
