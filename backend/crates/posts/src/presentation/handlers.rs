//! HTTP Handlers

use std::sync::Arc;

use auth::AuthContext;
use axum::extract::{Path, Query, State};
use kernel::envelope::{ApiResponse, Envelope};
use kernel::extract::JsonBody;
use kernel::id::PostId;
use kernel::pagination::{Page, PageQuery};

use crate::application::{
    CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase, PostsConfig,
    UpdatePostUseCase,
};
use crate::domain::repository::{OwnerDirectory, PostRepository};
use crate::error::{PostsError, PostsResult};
use crate::presentation::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

/// Shared state for post handlers
#[derive(Clone)]
pub struct PostsAppState<P, O>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    O: OwnerDirectory + Clone + Send + Sync + 'static,
{
    pub posts: Arc<P>,
    pub owners: Arc<O>,
    pub config: Arc<PostsConfig>,
}

impl<P, O> PostsAppState<P, O>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    O: OwnerDirectory + Clone + Send + Sync + 'static,
{
    pub fn new(posts: P, owners: Arc<O>, config: PostsConfig) -> Self {
        Self {
            posts: Arc::new(posts),
            owners,
            config: Arc::new(config),
        }
    }
}

/// Malformed ids cannot name an existing post
fn parse_post_id(raw: &str) -> PostsResult<PostId> {
    raw.parse().map_err(|_| PostsError::NotFound)
}

/// GET /api/v1/posts?page=&per_page=
pub async fn list_posts<P, O>(
    State(state): State<PostsAppState<P, O>>,
    context: AuthContext,
    Query(query): Query<PageQuery>,
) -> PostsResult<ApiResponse<Page<PostResponse>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    O: OwnerDirectory + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.posts.clone(), state.owners.clone());
    let page = query.into_request(state.config.default_per_page);

    let posts = use_case.execute(&context, page).await?;

    Ok(ApiResponse::ok(Envelope::data(posts.map(PostResponse::from))))
}

/// POST /api/v1/posts
pub async fn create_post<P, O>(
    State(state): State<PostsAppState<P, O>>,
    context: AuthContext,
    JsonBody(req): JsonBody<CreatePostRequest>,
) -> PostsResult<ApiResponse<PostResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    O: OwnerDirectory + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.posts.clone(), state.owners.clone());

    let view = use_case.execute(&context, req.into()).await?;

    Ok(ApiResponse::created(Envelope::with_message(
        "Post created successfully",
        PostResponse::from(view),
    )))
}

/// GET /api/v1/posts/{id}
pub async fn get_post<P, O>(
    State(state): State<PostsAppState<P, O>>,
    _context: AuthContext,
    Path(id): Path<String>,
) -> PostsResult<ApiResponse<PostResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    O: OwnerDirectory + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let use_case = GetPostUseCase::new(state.posts.clone(), state.owners.clone());

    let view = use_case.execute(&post_id).await?;

    Ok(ApiResponse::ok(Envelope::data(PostResponse::from(view))))
}

/// PUT /api/v1/posts/{id}
pub async fn update_post<P, O>(
    State(state): State<PostsAppState<P, O>>,
    context: AuthContext,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdatePostRequest>,
) -> PostsResult<ApiResponse<PostResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    O: OwnerDirectory + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let use_case = UpdatePostUseCase::new(state.posts.clone(), state.owners.clone());

    let view = use_case.execute(&context, &post_id, req.into()).await?;

    Ok(ApiResponse::ok(Envelope::with_message(
        "Post updated successfully",
        PostResponse::from(view),
    )))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post<P, O>(
    State(state): State<PostsAppState<P, O>>,
    context: AuthContext,
    Path(id): Path<String>,
) -> PostsResult<ApiResponse<()>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    O: OwnerDirectory + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let use_case = DeletePostUseCase::new(state.posts.clone());

    use_case.execute(&context, &post_id).await?;

    Ok(ApiResponse::ok(Envelope::message("Post deleted successfully")))
}
