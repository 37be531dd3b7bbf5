//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{AccessTokenId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{access_token::AccessToken, user::User};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // users_email_key
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AuthError::EmailTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

// ============================================================================
// Access Token Repository Implementation
// ============================================================================

impl AccessTokenRepository for PgAuthRepository {
    async fn create(&self, token: &AccessToken) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO access_tokens (
                token_id,
                user_id,
                name,
                token_hash,
                created_at,
                last_used_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(token.token_id.as_uuid())
        .bind(token.user_id.as_uuid())
        .bind(&token.name)
        .bind(token.token_hash.as_slice())
        .bind(token.created_at)
        .bind(token.last_used_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_hash(&self, token_hash: &[u8; 32]) -> AuthResult<Option<AccessToken>> {
        let row = sqlx::query_as::<_, AccessTokenRow>(
            r#"
            SELECT
                token_id,
                user_id,
                name,
                token_hash,
                created_at,
                last_used_at
            FROM access_tokens
            WHERE token_hash = $1
            "#,
        )
        .bind(token_hash.as_slice())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_token()).transpose()
    }

    async fn touch_last_used(
        &self,
        token_id: &AccessTokenId,
        at: DateTime<Utc>,
    ) -> AuthResult<()> {
        sqlx::query("UPDATE access_tokens SET last_used_at = $2 WHERE token_id = $1")
            .bind(token_id.as_uuid())
            .bind(at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, token_id: &AccessTokenId) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM access_tokens WHERE token_id = $1")
            .bind(token_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = UserPassword::from_db(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password_hash: {}", e)))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            name: UserName::from_db(self.name),
            email: Email::from_db(self.email),
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AccessTokenRow {
    token_id: Uuid,
    user_id: Uuid,
    name: String,
    token_hash: Vec<u8>,
    created_at: DateTime<Utc>,
    last_used_at: Option<DateTime<Utc>>,
}

impl AccessTokenRow {
    fn into_token(self) -> AuthResult<AccessToken> {
        let token_hash: [u8; 32] = self
            .token_hash
            .try_into()
            .map_err(|_| AuthError::Internal("Invalid token_hash length".to_string()))?;

        Ok(AccessToken {
            token_id: AccessTokenId::from_uuid(self.token_id),
            user_id: UserId::from_uuid(self.user_id),
            name: self.name,
            token_hash,
            created_at: self.created_at,
            last_used_at: self.last_used_at,
        })
    }
}
