//! Auth Middleware
//!
//! Bearer-token guard for protected routes, and the extractor handlers use
//! to receive the resolved caller.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;

use crate::application::{AuthContext, TokenAuthority};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::token_secret::TokenSecret;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Middleware that requires a valid bearer token
///
/// Rejects with 401 before the handler runs; on success the [`AuthContext`]
/// is placed in the request extensions.
pub async fn require_bearer_token<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let secret = extract_bearer_token(req.headers())
        .map(|raw| TokenSecret::presented(raw))
        .ok_or(AuthError::Unauthenticated)?;

    let authority = TokenAuthority::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let context = authority.resolve(&secret).await?;

    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Absent only when a route forgot the guard
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AuthError::Unauthenticated)
    }
}
