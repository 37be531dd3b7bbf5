//! Posts Router

use auth::domain::repository::{AccessTokenRepository, UserRepository};
use auth::{AuthAppState, middleware::require_bearer_token};
use axum::{Router, middleware::from_fn_with_state, routing::get};

use crate::domain::repository::{OwnerDirectory, PostRepository};
use crate::presentation::handlers::{self, PostsAppState};

/// Routes mounted under `/api/v1`, every one behind the bearer guard
pub fn posts_router<P, O, A>(state: PostsAppState<P, O>, auth: AuthAppState<A>) -> Router
where
    P: PostRepository + Clone + Send + Sync + 'static,
    O: OwnerDirectory + Clone + Send + Sync + 'static,
    A: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/posts",
            get(handlers::list_posts::<P, O>).post(handlers::create_post::<P, O>),
        )
        .route(
            "/posts/{id}",
            get(handlers::get_post::<P, O>)
                .put(handlers::update_post::<P, O>)
                .delete(handlers::delete_post::<P, O>),
        )
        .route_layer(from_fn_with_state(auth, require_bearer_token::<A>))
        .with_state(state)
}
