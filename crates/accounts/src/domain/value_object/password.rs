//! Password Value Objects
//!
//! Wraps `platform::password` with the product's complexity policy.
//!
//! Policy decision: complexity IS enforced at creation and reset. A password
//! must contain at least one lowercase letter, one uppercase letter, and one
//! special character. Login verification deliberately accepts any candidate
//! string, so accounts created under an older policy can still fail/succeed
//! on the hash comparison alone (and bad attempts still count toward
//! lockout).

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;
use thiserror::Error;

/// Special characters accepted for the complexity rule
const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;':\",.<>?/`~";

/// Password validation errors (policy + complexity)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// Baseline policy violation (length, control characters)
    #[error(transparent)]
    Policy(#[from] PasswordPolicyError),

    /// No lowercase letter present
    #[error("Password must contain at least one lowercase letter.")]
    MissingLowercase,

    /// No uppercase letter present
    #[error("Password must contain at least one uppercase letter.")]
    MissingUppercase,

    /// No special character present
    #[error("Password must contain at least one special character.")]
    MissingSpecial,
}

/// Raw password from user input, validated against the full policy
///
/// Memory is zeroized when dropped; Debug output is redacted.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate a candidate password for account creation or reset.
    pub fn new(raw: String) -> Result<Self, PasswordError> {
        if !raw.chars().any(|c| c.is_lowercase()) {
            return Err(PasswordError::MissingLowercase);
        }
        if !raw.chars().any(|c| c.is_uppercase()) {
            return Err(PasswordError::MissingUppercase);
        }
        if !raw.chars().any(|c| SPECIAL_CHARS.contains(c)) {
            return Err(PasswordError::MissingSpecial);
        }

        let clear_text = ClearTextPassword::new(raw)?;
        Ok(Self(clear_text))
    }

    fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

/// Hashed password for storage
///
/// Stores the Argon2id PHC string. Verifiable, never readable.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(HashedPassword);

impl PasswordHash {
    /// Hash a validated raw password.
    pub fn from_raw(raw: &RawPassword) -> Result<Self, PasswordHashError> {
        let hashed = raw.inner().hash()?;
        Ok(Self(hashed))
    }

    /// Restore from a PHC string loaded from storage.
    pub fn from_phc_string(phc: impl Into<String>) -> Result<Self, PasswordHashError> {
        Ok(Self(HashedPassword::from_phc_string(phc)?))
    }

    /// Get the PHC string for storage.
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify an arbitrary candidate string against this hash.
    ///
    /// Takes `&str` rather than [`RawPassword`] on purpose: login attempts
    /// must not be filtered by the creation-time complexity policy.
    pub fn verify(&self, candidate: &str) -> bool {
        self.0.verify(candidate)
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash").field("hash", &"[HASH]").finish()
    }
}
