//! User Role Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization role of a user
///
/// `Anonymous` is a sentinel for unauthenticated callers and is never
/// persisted against a real account; stored users default to
/// `Authenticated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum UserRole {
    Anonymous = 0,
    #[default]
    Authenticated = 1,
    Manager = 2,
    Admin = 3,
}

impl UserRole {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Anonymous => "ANONYMOUS",
            Self::Authenticated => "AUTHENTICATED",
            Self::Manager => "MANAGER",
            Self::Admin => "ADMIN",
        }
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Anonymous),
            1 => Some(Self::Authenticated),
            2 => Some(Self::Manager),
            3 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ANONYMOUS" => Some(Self::Anonymous),
            "AUTHENTICATED" => Some(Self::Authenticated),
            "MANAGER" => Some(Self::Manager),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    /// True for the unauthenticated-caller sentinel
    #[inline]
    pub const fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// Check for elevated privileges (Manager or Admin)
    #[inline]
    pub const fn is_manager_or_higher(&self) -> bool {
        matches!(self, Self::Manager | Self::Admin)
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_authenticated() {
        assert_eq!(UserRole::default(), UserRole::Authenticated);
    }

    #[test]
    fn test_id_roundtrip() {
        for role in [
            UserRole::Anonymous,
            UserRole::Authenticated,
            UserRole::Manager,
            UserRole::Admin,
        ] {
            assert_eq!(UserRole::from_id(role.id()), Some(role));
        }
        assert_eq!(UserRole::from_id(42), None);
    }

    #[test]
    fn test_code_roundtrip() {
        for role in [
            UserRole::Anonymous,
            UserRole::Authenticated,
            UserRole::Manager,
            UserRole::Admin,
        ] {
            assert_eq!(UserRole::from_code(role.code()), Some(role));
        }
        assert_eq!(UserRole::from_code("user"), None);
    }

    #[test]
    fn test_privilege_checks() {
        assert!(!UserRole::Authenticated.is_manager_or_higher());
        assert!(UserRole::Manager.is_manager_or_higher());
        assert!(UserRole::Admin.is_manager_or_higher());
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Manager.is_admin());
        assert!(UserRole::Anonymous.is_anonymous());
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&UserRole::Authenticated).unwrap();
        assert_eq!(json, "\"AUTHENTICATED\"");
        let role: UserRole = serde_json::from_str("\"MANAGER\"").unwrap();
        assert_eq!(role, UserRole::Manager);
    }
}
