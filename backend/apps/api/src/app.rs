//! Router composition
//!
//! `/api/v1` carries the auth and post routes, `/api/user` returns the
//! caller. Unknown paths answer with a 404 envelope.

use std::sync::Arc;

use auth::domain::repository::{AccessTokenRepository, UserRepository};
use auth::{AuthAppState, AuthConfig, auth_router, current_user_router};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use kernel::error::app_error::AppError;
use posts::domain::repository::{OwnerDirectory, PostRepository};
use posts::{PostsAppState, PostsConfig, posts_router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

/// Build the full API router over the given storage
pub fn build_router<A, P>(
    auth_repo: A,
    post_repo: P,
    auth_config: AuthConfig,
    posts_config: PostsConfig,
) -> Router
where
    A: UserRepository + AccessTokenRepository + OwnerDirectory + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let auth = AuthAppState::new(auth_repo, auth_config);
    // The user table doubles as the owner directory
    let posts = PostsAppState::new(post_repo, Arc::clone(&auth.repo), posts_config);

    let v1 = auth_router(auth.clone()).merge(posts_router(posts, auth.clone()));

    Router::new()
        .nest("/api/v1", v1)
        .nest("/api", current_user_router(auth))
        .fallback(route_not_found)
}

async fn route_not_found() -> AppError {
    AppError::not_found("Route not found")
}

/// CORS for the browser front end
///
/// Bearer tokens travel in a header, so credentials (cookies) stay off.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
