//! User Entity
//!
//! Central account record: credentials, profile, and security state.
//!
//! ## Lock state machine
//! - `Unlocked(count < threshold)` --failed login--> `Unlocked(count + 1)`
//! - count reaches threshold --> `Locked` (sticky)
//! - `Locked` --unlock--> `Unlocked(0)`
//! - Successful login while unlocked resets the counter without changing
//!   state.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    Email, Nickname, PasswordHash, ProfileUrl, UserId, UserRole,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// UUID primary key
    pub id: UserId,
    /// Unique, lowercased email
    pub email: Email,
    /// Argon2id hash; the clear text is never stored
    pub password_hash: PasswordHash,
    /// Unique public handle
    pub nickname: Nickname,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<ProfileUrl>,
    pub linkedin_profile_url: Option<ProfileUrl>,
    pub github_profile_url: Option<ProfileUrl>,
    /// Role; defaults to Authenticated, Anonymous is never persisted
    pub role: UserRole,
    pub is_professional: bool,
    /// Consecutive failed login attempts since the last success
    pub failed_login_count: u32,
    /// Sticky lock flag; cleared only by an explicit unlock
    pub is_locked: bool,
    /// One-time token issued at registration, cleared on verification
    pub verification_token: Option<String>,
    pub email_verified: bool,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new unverified, unlocked user with a fresh verification
    /// token.
    pub fn new(email: Email, nickname: Nickname, password_hash: PasswordHash) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email,
            password_hash,
            nickname,
            first_name: None,
            last_name: None,
            bio: None,
            profile_picture_url: None,
            linkedin_profile_url: None,
            github_profile_url: None,
            role: UserRole::default(),
            is_professional: false,
            failed_login_count: 0,
            is_locked: false,
            verification_token: Some(platform::token::generate_default()),
            email_verified: false,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a successful login: reset the failure counter and stamp the
    /// login time. Does not touch the lock flag; a locked account never
    /// reaches this point.
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.failed_login_count = 0;
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Record a failed login attempt; locks the account once the counter
    /// reaches `threshold`.
    pub fn record_failed_login(&mut self, threshold: u32) {
        self.failed_login_count += 1;
        if self.failed_login_count >= threshold {
            self.is_locked = true;
        }
        self.updated_at = Utc::now();
    }

    /// Explicit unlock: clears both the counter and the lock flag.
    pub fn unlock(&mut self) {
        self.failed_login_count = 0;
        self.is_locked = false;
        self.updated_at = Utc::now();
    }

    /// Attempt verification with a presented token.
    ///
    /// On an exact match the account is marked verified and the one-time
    /// token is cleared. Any mismatch (including an already-consumed token)
    /// leaves the entity untouched and returns false.
    pub fn verify_email(&mut self, token: &str) -> bool {
        match &self.verification_token {
            Some(stored) if stored == token => {
                self.email_verified = true;
                self.verification_token = None;
                self.updated_at = Utc::now();
                true
            }
            _ => false,
        }
    }

    /// Replace the password hash.
    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Check whether a login may proceed at all.
    pub fn can_login(&self) -> bool {
        self.email_verified && !self.is_locked
    }
}
