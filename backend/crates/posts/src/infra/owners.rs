//! Owner Directory over the auth user store
//!
//! Posts never read users directly; the projection comes from whichever
//! auth repository the process runs with.

use auth::domain::repository::UserRepository;
use auth::{MemoryAuthRepository, PgAuthRepository};
use kernel::id::UserId;
use uuid::Uuid;

use crate::domain::entity::owner::OwnerSummary;
use crate::domain::repository::OwnerDirectory;
use crate::error::{PostsError, PostsResult};

impl OwnerDirectory for MemoryAuthRepository {
    async fn find_owner(&self, user_id: &UserId) -> PostsResult<Option<OwnerSummary>> {
        let user = UserRepository::find_by_id(self, user_id)
            .await
            .map_err(|e| PostsError::Internal(e.to_string()))?;

        Ok(user.map(|u| OwnerSummary {
            user_id: u.user_id,
            name: u.name.into_inner(),
            email: u.email.as_str().to_string(),
        }))
    }
}

impl OwnerDirectory for PgAuthRepository {
    async fn find_owner(&self, user_id: &UserId) -> PostsResult<Option<OwnerSummary>> {
        let row: Option<(Uuid, String, String)> =
            sqlx::query_as("SELECT user_id, name, email FROM users WHERE user_id = $1")
                .bind(user_id.as_uuid())
                .fetch_optional(self.pool())
                .await?;

        Ok(row.map(|(id, name, email)| OwnerSummary {
            user_id: UserId::from_uuid(id),
            name,
            email,
        }))
    }
}
