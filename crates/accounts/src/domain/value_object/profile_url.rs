//! Profile URL Value Object
//!
//! Optional HTTP(S) links on a user profile (avatar, LinkedIn, GitHub).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// Scheme must be http or https; host must contain at least one dot.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^https?://[\w.-]+(?:\.[\w.-]+)+(?:[\w\-._~:/?#\[\]@!$&'()*+,;=.]+)?$"#)
        .expect("profile URL pattern compiles")
});

/// Profile URL validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid URL format")]
pub struct ProfileUrlError;

/// Validated HTTP(S) URL
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileUrl(String);

impl ProfileUrl {
    /// Create a new profile URL with validation
    pub fn new(url: impl Into<String>) -> Result<Self, ProfileUrlError> {
        let url = url.into();
        if !URL_PATTERN.is_match(&url) {
            return Err(ProfileUrlError);
        }
        Ok(Self(url))
    }

    /// Restore from storage (assumed already validated)
    pub fn from_trusted(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Get the URL as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to the owned string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ProfileUrl {
    type Error = ProfileUrlError;

    fn try_from(value: String) -> Result<Self, ProfileUrlError> {
        ProfileUrl::new(value)
    }
}

impl From<ProfileUrl> for String {
    fn from(url: ProfileUrl) -> Self {
        url.0
    }
}

impl fmt::Debug for ProfileUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProfileUrl({})", self.0)
    }
}

impl fmt::Display for ProfileUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
