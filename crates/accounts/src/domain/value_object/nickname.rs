//! Nickname Value Object
//!
//! Public handle shown next to a user's content. Uniqueness is enforced at
//! the repository level; this type only guarantees shape.
//!
//! ## Invariants
//! - At least 3 characters
//! - Matches `^[\w-]+$` (word characters and hyphens, no whitespace)

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum nickname length in characters
pub const NICKNAME_MIN_LENGTH: usize = 3;

static NICKNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w-]+$").expect("nickname pattern compiles"));

/// Word pools for generated nicknames
const ADJECTIVES: &[&str] = &[
    "clever", "jolly", "brave", "quiet", "gentle", "swift", "lucky", "mellow",
];
const ANIMALS: &[&str] = &[
    "panda", "fox", "raccoon", "koala", "otter", "heron", "lynx", "badger",
];

/// Nickname validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NicknameError {
    /// Shorter than [`NICKNAME_MIN_LENGTH`] characters
    #[error("Nickname must be at least {NICKNAME_MIN_LENGTH} characters")]
    TooShort,

    /// Contains characters outside `[\w-]`
    #[error("Nickname may only contain letters, digits, underscores and hyphens")]
    InvalidFormat,
}

/// Validated nickname
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nickname(String);

impl Nickname {
    /// Create a new nickname with validation
    pub fn new(nickname: impl Into<String>) -> Result<Self, NicknameError> {
        let nickname = nickname.into();

        if nickname.chars().count() < NICKNAME_MIN_LENGTH {
            return Err(NicknameError::TooShort);
        }

        if !NICKNAME_PATTERN.is_match(&nickname) {
            return Err(NicknameError::InvalidFormat);
        }

        Ok(Self(nickname))
    }

    /// Generate a random `adjective_animal_NNN` handle.
    ///
    /// Used for registrations that omit a nickname; the caller is still
    /// responsible for retrying on a uniqueness collision.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
        let animal = ANIMALS[rng.random_range(0..ANIMALS.len())];
        let number: u16 = rng.random_range(0..1000);
        Self(format!("{adjective}_{animal}_{number}"))
    }

    /// Restore from storage (assumed already validated)
    pub fn from_trusted(nickname: impl Into<String>) -> Self {
        Self(nickname.into())
    }

    /// Get the nickname as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to the owned string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Nickname {
    type Error = NicknameError;

    fn try_from(value: String) -> Result<Self, NicknameError> {
        Nickname::new(value)
    }
}

impl From<Nickname> for String {
    fn from(nickname: Nickname) -> Self {
        nickname.0
    }
}

impl fmt::Debug for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nickname({})", self.0)
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Nickname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_nicknames() {
        for nickname in ["valid_user", "user123", "u_nder-score", "abc"] {
            assert!(Nickname::new(nickname).is_ok(), "expected valid: {nickname}");
        }
    }

    #[test]
    fn test_invalid_nicknames() {
        assert_eq!(Nickname::new(""), Err(NicknameError::TooShort));
        assert_eq!(Nickname::new("12"), Err(NicknameError::TooShort));
        assert_eq!(
            Nickname::new("invalid user"),
            Err(NicknameError::InvalidFormat)
        );
        assert_eq!(Nickname::new("no$"), Err(NicknameError::InvalidFormat));
    }

    #[test]
    fn test_generated_nicknames_are_valid() {
        for _ in 0..50 {
            let nickname = Nickname::generate();
            assert!(Nickname::new(nickname.as_str()).is_ok());
        }
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let parsed: Result<Nickname, _> = serde_json::from_str("\"no way\"");
        assert!(parsed.is_err());

        let parsed: Nickname = serde_json::from_str("\"fine_name\"").unwrap();
        assert_eq!(parsed.as_str(), "fine_name");
    }
}
