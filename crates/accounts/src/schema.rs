//! Input/Output Schemas
//!
//! Declarative request and response shapes with validation. Inbound types
//! carry raw strings and are checked by `into_validated`, which parses them
//! into domain value objects; outbound types serialize value objects
//! directly so invalid data cannot leave the service either.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entity::User;
use crate::domain::value_object::{
    Email, EmailError, Nickname, NicknameError, PasswordError, ProfileUrl, ProfileUrlError,
    RawPassword, UserRole,
};

/// A schema-level validation failure, carrying the offending rule's message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<EmailError> for ValidationError {
    fn from(err: EmailError) -> Self {
        Self(err.to_string())
    }
}

impl From<NicknameError> for ValidationError {
    fn from(err: NicknameError) -> Self {
        Self(err.to_string())
    }
}

impl From<ProfileUrlError> for ValidationError {
    fn from(err: ProfileUrlError) -> Self {
        Self(err.to_string())
    }
}

impl From<PasswordError> for ValidationError {
    fn from(err: PasswordError) -> Self {
        Self(err.to_string())
    }
}

fn parse_url(url: Option<String>) -> Result<Option<ProfileUrl>, ValidationError> {
    url.map(ProfileUrl::new).transpose().map_err(Into::into)
}

// ============================================================================
// Create
// ============================================================================

/// Registration payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub email: String,
    /// Generated when omitted
    pub nickname: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub linkedin_profile_url: Option<String>,
    pub github_profile_url: Option<String>,
    pub password: String,
}

/// Validated registration data, ready for the service layer
#[derive(Debug)]
pub struct NewAccount {
    pub email: Email,
    pub nickname: Option<Nickname>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<ProfileUrl>,
    pub linkedin_profile_url: Option<ProfileUrl>,
    pub github_profile_url: Option<ProfileUrl>,
    pub password: RawPassword,
}

impl UserCreate {
    /// Validate every field, consuming the payload.
    pub fn into_validated(self) -> Result<NewAccount, ValidationError> {
        Ok(NewAccount {
            email: Email::new(self.email)?,
            nickname: self.nickname.map(Nickname::new).transpose()?,
            first_name: self.first_name,
            last_name: self.last_name,
            bio: self.bio,
            profile_picture_url: parse_url(self.profile_picture_url)?,
            linkedin_profile_url: parse_url(self.linkedin_profile_url)?,
            github_profile_url: parse_url(self.github_profile_url)?,
            password: RawPassword::new(self.password)?,
        })
    }
}

// ============================================================================
// Update
// ============================================================================

/// Partial update payload; omitted fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub linkedin_profile_url: Option<String>,
    pub github_profile_url: Option<String>,
}

/// Validated partial update
#[derive(Debug)]
pub struct ProfileChanges {
    pub email: Option<Email>,
    pub nickname: Option<Nickname>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<ProfileUrl>,
    pub linkedin_profile_url: Option<ProfileUrl>,
    pub github_profile_url: Option<ProfileUrl>,
}

impl UserUpdate {
    fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.nickname.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.bio.is_none()
            && self.profile_picture_url.is_none()
            && self.linkedin_profile_url.is_none()
            && self.github_profile_url.is_none()
    }

    /// Validate the payload; rejects an all-null update outright.
    pub fn into_validated(self) -> Result<ProfileChanges, ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::new(
                "At least one non-null field must be provided for update",
            ));
        }

        Ok(ProfileChanges {
            email: self.email.map(Email::new).transpose()?,
            nickname: self.nickname.map(Nickname::new).transpose()?,
            first_name: self.first_name,
            last_name: self.last_name,
            bio: self.bio,
            profile_picture_url: parse_url(self.profile_picture_url)?,
            linkedin_profile_url: parse_url(self.linkedin_profile_url)?,
            github_profile_url: parse_url(self.github_profile_url)?,
        })
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login payload; checked against stored credentials, not the schema rules
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Public representation of a user; never includes credential material
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: Email,
    pub nickname: Nickname,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<ProfileUrl>,
    pub linkedin_profile_url: Option<ProfileUrl>,
    pub github_profile_url: Option<ProfileUrl>,
    pub role: UserRole,
    pub is_professional: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into_uuid(),
            email: user.email.clone(),
            nickname: user.nickname.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            bio: user.bio.clone(),
            profile_picture_url: user.profile_picture_url.clone(),
            linkedin_profile_url: user.linkedin_profile_url.clone(),
            github_profile_url: user.github_profile_url.clone(),
            role: user.role,
            is_professional: user.is_professional,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// Pagination envelope for user listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub items: Vec<UserResponse>,
    pub total: i64,
    /// 1-based page number derived from skip/limit
    pub page: i64,
    pub size: i64,
}

impl UserListResponse {
    /// Build the envelope from a fetched page and the offset parameters.
    pub fn paginate(users: &[User], total: i64, skip: i64, limit: i64) -> Self {
        let size = limit.max(1);
        Self {
            items: users.iter().map(UserResponse::from).collect(),
            total,
            page: skip / size + 1,
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_create() -> UserCreate {
        serde_json::from_value(json!({
            "email": "test@example.com",
            "nickname": "valid_user",
            "firstName": "Test",
            "lastName": "User",
            "bio": "Just testing.",
            "profilePictureUrl": "https://example.com/pic.jpg",
            "linkedinProfileUrl": "https://linkedin.com/in/testuser",
            "githubProfileUrl": "https://github.com/testuser",
            "password": "StrongP@ss123"
        }))
        .unwrap()
    }

    #[test]
    fn test_create_valid() {
        let account = base_create().into_validated().unwrap();
        assert_eq!(account.email.as_str(), "test@example.com");
        assert_eq!(account.nickname.unwrap().as_str(), "valid_user");
        assert_eq!(account.first_name.as_deref(), Some("Test"));
    }

    #[test]
    fn test_create_invalid_email() {
        let mut payload = base_create();
        payload.email = "invalid-email".to_string();
        let err = payload.into_validated().unwrap_err();
        assert_eq!(err.message(), "Invalid email format");
    }

    #[test]
    fn test_create_nickname_matrix() {
        for nickname in ["valid_user", "user123", "u_nder-score"] {
            let mut payload = base_create();
            payload.nickname = Some(nickname.to_string());
            assert!(payload.into_validated().is_ok(), "expected valid: {nickname}");
        }
        for nickname in ["invalid user", "no$", "", "12"] {
            let mut payload = base_create();
            payload.nickname = Some(nickname.to_string());
            assert!(
                payload.into_validated().is_err(),
                "expected invalid: {nickname}"
            );
        }
    }

    #[test]
    fn test_create_url_matrix() {
        for url in ["http://valid.com", "https://site.org"] {
            let mut payload = base_create();
            payload.profile_picture_url = Some(url.to_string());
            assert!(payload.into_validated().is_ok(), "expected valid: {url}");
        }
        // Omitted URL is fine
        let mut payload = base_create();
        payload.profile_picture_url = None;
        assert!(payload.into_validated().is_ok());

        for url in ["ftp://bad.com", "https//missingcolon.com", "invalid"] {
            let mut payload = base_create();
            payload.profile_picture_url = Some(url.to_string());
            let err = payload.into_validated().unwrap_err();
            assert_eq!(err.message(), "Invalid URL format", "url: {url}");
        }
    }

    #[test]
    fn test_create_password_complexity() {
        let mut payload = base_create();
        payload.password = "Weak1".to_string();
        let err = payload.into_validated().unwrap_err();
        assert!(err.message().contains("special character"));
    }

    #[test]
    fn test_update_requires_one_field() {
        let err = UserUpdate::default().into_validated().unwrap_err();
        assert_eq!(
            err.message(),
            "At least one non-null field must be provided for update"
        );

        let update = UserUpdate {
            bio: Some("new bio".to_string()),
            ..Default::default()
        };
        let changes = update.into_validated().unwrap();
        assert_eq!(changes.bio.as_deref(), Some("new bio"));
        assert!(changes.email.is_none());
    }

    #[test]
    fn test_update_validates_present_fields() {
        let update = UserUpdate {
            email: Some("invalidemail".to_string()),
            ..Default::default()
        };
        assert!(update.into_validated().is_err());
    }

    #[test]
    fn test_login_request_deserializes() {
        let login: LoginRequest = serde_json::from_value(json!({
            "email": "user@example.com",
            "password": "123456"
        }))
        .unwrap();
        assert_eq!(login.email, "user@example.com");
        assert_eq!(login.password, "123456");
    }

    #[test]
    fn test_user_response_shape() {
        use crate::domain::value_object::PasswordHash;

        let raw = RawPassword::new("ResponseTest1!".to_string()).unwrap();
        let user = User::new(
            Email::new("resp@example.com").unwrap(),
            Nickname::new("resp_user").unwrap(),
            PasswordHash::from_raw(&raw).unwrap(),
        );

        let response = UserResponse::from(&user);
        assert_eq!(response.role, UserRole::Authenticated);
        assert!(!response.is_professional);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["email"], "resp@example.com");
        assert_eq!(value["role"], "AUTHENTICATED");
        assert_eq!(value["isProfessional"], false);
        // Credential material never serializes
        assert!(value.get("password").is_none());
        assert!(value.get("passwordHash").is_none());
    }

    #[test]
    fn test_pagination_envelope() {
        let envelope = UserListResponse::paginate(&[], 50, 20, 10);
        assert_eq!(envelope.total, 50);
        assert_eq!(envelope.page, 3);
        assert_eq!(envelope.size, 10);
        assert!(envelope.items.is_empty());

        let first = UserListResponse::paginate(&[], 50, 0, 10);
        assert_eq!(first.page, 1);
    }
}
