//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{EmailOutbox, OutboxStatus, User};
use crate::domain::repository::{OutboxRepository, UserRepository};
use crate::domain::value_object::{
    Email, Nickname, PasswordHash, ProfileUrl, UserId, UserRole,
};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Translate unique-constraint violations into the typed conflict errors
/// so callers never see a raw constraint name.
fn map_insert_error(err: sqlx::Error) -> AccountError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some(name) if name.contains("email") => AccountError::EmailTaken,
                Some(name) if name.contains("nickname") => AccountError::NicknameTaken,
                _ => AccountError::Database(err),
            };
        }
    }
    AccountError::Database(err)
}

// ============================================================================
// User Repository Implementation
// ============================================================================

const USER_COLUMNS: &str = r#"
    id,
    email,
    password_hash,
    nickname,
    first_name,
    last_name,
    bio,
    profile_picture_url,
    linkedin_profile_url,
    github_profile_url,
    role,
    is_professional,
    failed_login_count,
    is_locked,
    verification_token,
    email_verified,
    last_login_at,
    created_at,
    updated_at
"#;

impl UserRepository for PgAccountRepository {
    async fn create(&self, user: &User) -> AccountResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id,
                email,
                password_hash,
                nickname,
                first_name,
                last_name,
                bio,
                profile_picture_url,
                linkedin_profile_url,
                github_profile_url,
                role,
                is_professional,
                failed_login_count,
                is_locked,
                verification_token,
                email_verified,
                last_login_at,
                created_at,
                updated_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18, $19
            )
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.nickname.as_str())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.bio)
        .bind(user.profile_picture_url.as_ref().map(|u| u.as_str()))
        .bind(user.linkedin_profile_url.as_ref().map(|u| u.as_str()))
        .bind(user.github_profile_url.as_ref().map(|u| u.as_str()))
        .bind(user.role.id())
        .bind(user.is_professional)
        .bind(user.failed_login_count as i32)
        .bind(user.is_locked)
        .bind(&user.verification_token)
        .bind(user.email_verified)
        .bind(user.last_login_at)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_nickname(&self, nickname: &str) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE nickname = $1"
        ))
        .bind(nickname)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn exists_by_nickname(&self, nickname: &str) -> AccountResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE nickname = $1)",
        )
        .bind(nickname)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, user: &User) -> AccountResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                email = $2,
                password_hash = $3,
                nickname = $4,
                first_name = $5,
                last_name = $6,
                bio = $7,
                profile_picture_url = $8,
                linkedin_profile_url = $9,
                github_profile_url = $10,
                role = $11,
                is_professional = $12,
                failed_login_count = $13,
                is_locked = $14,
                verification_token = $15,
                email_verified = $16,
                last_login_at = $17,
                updated_at = $18
            WHERE id = $1
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.nickname.as_str())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.bio)
        .bind(user.profile_picture_url.as_ref().map(|u| u.as_str()))
        .bind(user.linkedin_profile_url.as_ref().map(|u| u.as_str()))
        .bind(user.github_profile_url.as_ref().map(|u| u.as_str()))
        .bind(user.role.id())
        .bind(user.is_professional)
        .bind(user.failed_login_count as i32)
        .bind(user.is_locked)
        .bind(&user.verification_token)
        .bind(user.email_verified)
        .bind(user.last_login_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(())
    }

    async fn delete(&self, id: &UserId) -> AccountResult<bool> {
        let deleted = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn list(&self, skip: i64, limit: i64) -> AccountResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at, id OFFSET $1 LIMIT $2"
        ))
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_user()).collect()
    }

    async fn count(&self) -> AccountResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// ============================================================================
// Outbox Repository Implementation
// ============================================================================

impl OutboxRepository for PgAccountRepository {
    async fn append(&self, entry: &EmailOutbox) -> AccountResult<()> {
        sqlx::query(
            r#"
            INSERT INTO email_outbox (
                id,
                user_id,
                recipient,
                subject,
                body,
                status,
                attempts,
                last_error,
                created_at,
                sent_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(entry.id)
        .bind(entry.user_id.as_uuid())
        .bind(entry.recipient.as_str())
        .bind(&entry.subject)
        .bind(&entry.body)
        .bind(entry.status.id())
        .bind(entry.attempts as i32)
        .bind(&entry.last_error)
        .bind(entry.created_at)
        .bind(entry.sent_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_pending(&self, limit: i64) -> AccountResult<Vec<EmailOutbox>> {
        let rows = sqlx::query_as::<_, OutboxRow>(
            r#"
            SELECT
                id,
                user_id,
                recipient,
                subject,
                body,
                status,
                attempts,
                last_error,
                created_at,
                sent_at
            FROM email_outbox
            WHERE status = $1
            ORDER BY created_at
            LIMIT $2
            "#,
        )
        .bind(OutboxStatus::Pending.id())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_entry()).collect()
    }

    async fn update(&self, entry: &EmailOutbox) -> AccountResult<()> {
        sqlx::query(
            r#"
            UPDATE email_outbox SET
                status = $2,
                attempts = $3,
                last_error = $4,
                sent_at = $5
            WHERE id = $1
            "#,
        )
        .bind(entry.id)
        .bind(entry.status.id())
        .bind(entry.attempts as i32)
        .bind(&entry.last_error)
        .bind(entry.sent_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    nickname: String,
    first_name: Option<String>,
    last_name: Option<String>,
    bio: Option<String>,
    profile_picture_url: Option<String>,
    linkedin_profile_url: Option<String>,
    github_profile_url: Option<String>,
    role: i16,
    is_professional: bool,
    failed_login_count: i32,
    is_locked: bool,
    verification_token: Option<String>,
    email_verified: bool,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AccountResult<User> {
        let password_hash = PasswordHash::from_phc_string(self.password_hash)
            .map_err(|e| AccountError::Internal(format!("Invalid password hash: {}", e)))?;

        let role = UserRole::from_id(self.role)
            .ok_or_else(|| AccountError::Internal(format!("Invalid role id: {}", self.role)))?;

        Ok(User {
            id: UserId::from_uuid(self.id),
            email: Email::from_trusted(self.email),
            password_hash,
            nickname: Nickname::from_trusted(self.nickname),
            first_name: self.first_name,
            last_name: self.last_name,
            bio: self.bio,
            profile_picture_url: self.profile_picture_url.map(ProfileUrl::from_trusted),
            linkedin_profile_url: self.linkedin_profile_url.map(ProfileUrl::from_trusted),
            github_profile_url: self.github_profile_url.map(ProfileUrl::from_trusted),
            role,
            is_professional: self.is_professional,
            failed_login_count: self.failed_login_count.max(0) as u32,
            is_locked: self.is_locked,
            verification_token: self.verification_token,
            email_verified: self.email_verified,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct OutboxRow {
    id: Uuid,
    user_id: Uuid,
    recipient: String,
    subject: String,
    body: String,
    status: i16,
    attempts: i32,
    last_error: Option<String>,
    created_at: DateTime<Utc>,
    sent_at: Option<DateTime<Utc>>,
}

impl OutboxRow {
    fn into_entry(self) -> AccountResult<EmailOutbox> {
        let status = OutboxStatus::from_id(self.status).ok_or_else(|| {
            AccountError::Internal(format!("Invalid outbox status id: {}", self.status))
        })?;

        Ok(EmailOutbox {
            id: self.id,
            user_id: UserId::from_uuid(self.user_id),
            recipient: Email::from_trusted(self.recipient),
            subject: self.subject,
            body: self.body,
            status,
            attempts: self.attempts.max(0) as u32,
            last_error: self.last_error,
            created_at: self.created_at,
            sent_at: self.sent_at,
        })
    }
}
