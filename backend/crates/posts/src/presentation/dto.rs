//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::validation::TextInput;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::application::{NewPostInput, PostPatchInput, PostView};
use crate::domain::entity::owner::OwnerSummary;

// ============================================================================
// Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<TextInput>,
    pub content: Option<TextInput>,
}

impl From<CreatePostRequest> for NewPostInput {
    fn from(req: CreatePostRequest) -> Self {
        NewPostInput {
            title: req.title,
            content: req.content,
        }
    }
}

/// Update post request
///
/// Keeps "key absent" (`None`) apart from "key present with null"
/// (`Some(None)`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<TextInput>>,
    #[serde(default, deserialize_with = "present")]
    pub content: Option<Option<TextInput>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<TextInput>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TextInput>::deserialize(deserializer).map(Some)
}

impl From<UpdatePostRequest> for PostPatchInput {
    fn from(req: UpdatePostRequest) -> Self {
        PostPatchInput {
            title: req.title,
            content: req.content,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Owner projection embedded in every post
#[derive(Debug, Clone, Serialize)]
pub struct OwnerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<OwnerSummary> for OwnerResponse {
    fn from(owner: OwnerSummary) -> Self {
        Self {
            id: owner.user_id.into_uuid(),
            name: owner.name,
            email: owner.email,
        }
    }
}

/// Public post record
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: OwnerResponse,
}

impl From<PostView> for PostResponse {
    fn from(view: PostView) -> Self {
        let PostView { post, owner } = view;
        Self {
            id: post.post_id.into_uuid(),
            user_id: post.user_id.into_uuid(),
            title: post.title.into_inner(),
            content: post.content.into_inner(),
            created_at: post.created_at,
            updated_at: post.updated_at,
            user: owner.into(),
        }
    }
}
