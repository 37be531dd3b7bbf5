//! PostgreSQL Post Repository

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use kernel::pagination::PageRequest;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::post::{Post, PostChanges};
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{
    post_content::PostContent,
    post_title::PostTitle,
};
use crate::error::PostsResult;

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> PostsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                user_id,
                title,
                content,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.user_id.as_uuid())
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostsResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, user_id, title, content, created_at, updated_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn list_by_owner(
        &self,
        owner: &UserId,
        page: PageRequest,
    ) -> PostsResult<(Vec<Post>, u64)> {
        let (limit, offset) = sql_window(&page);

        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, user_id, title, content, created_at, updated_at
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at DESC, post_id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner.as_uuid())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE user_id = $1")
            .bind(owner.as_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok((
            rows.into_iter().map(PostRow::into_post).collect(),
            u64::try_from(total).unwrap_or(0),
        ))
    }

    async fn update_owned(
        &self,
        post_id: &PostId,
        owner: &UserId,
        changes: PostChanges,
        now: DateTime<Utc>,
    ) -> PostsResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET title = COALESCE($3::text, title),
                content = COALESCE($4::text, content),
                updated_at = CASE
                    WHEN COALESCE($3::text, title) IS DISTINCT FROM title
                      OR COALESCE($4::text, content) IS DISTINCT FROM content
                    THEN GREATEST(updated_at, $5)
                    ELSE updated_at
                END
            WHERE post_id = $1 AND user_id = $2
            RETURNING post_id, user_id, title, content, created_at, updated_at
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(owner.as_uuid())
        .bind(changes.title.as_ref().map(PostTitle::as_str))
        .bind(changes.content.as_ref().map(PostContent::as_str))
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn delete_owned(&self, post_id: &PostId, owner: &UserId) -> PostsResult<bool> {
        let deleted = sqlx::query("DELETE FROM posts WHERE post_id = $1 AND user_id = $2")
            .bind(post_id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

/// `LIMIT`/`OFFSET` binds; values past `i64::MAX` saturate, which Postgres
/// answers with an empty page
fn sql_window(page: &PageRequest) -> (i64, i64) {
    (
        i64::try_from(page.limit()).unwrap_or(i64::MAX),
        i64::try_from(page.offset()).unwrap_or(i64::MAX),
    )
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    user_id: Uuid,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            user_id: UserId::from_uuid(self.user_id),
            title: PostTitle::from_db(self.title),
            content: PostContent::from_db(self.content),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
