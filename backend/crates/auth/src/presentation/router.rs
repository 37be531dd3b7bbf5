//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_bearer_token;

/// Routes mounted under `/api/v1`
///
/// `signup` and `signin` are public; `signout` requires a bearer token.
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let protected = Router::new()
        .route("/signout", post(handlers::sign_out::<R>))
        .route_layer(from_fn_with_state(state.clone(), require_bearer_token::<R>));

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .merge(protected)
        .with_state(state)
}

/// `GET /user` (mounted under `/api`), guarded
pub fn current_user_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/user", get(handlers::current_user))
        .route_layer(from_fn_with_state(state, require_bearer_token::<R>))
}
