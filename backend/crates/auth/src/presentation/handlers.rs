//! HTTP Handlers

use axum::extract::State;
use kernel::envelope::{ApiResponse, Envelope};
use kernel::extract::JsonBody;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{AuthContext, SignInUseCase, SignOutUseCase, SignUpUseCase};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{AuthTokenResponse, SignInRequest, SignUpRequest, UserResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/v1/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<SignUpRequest>,
) -> AuthResult<ApiResponse<AuthTokenResponse>>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case.execute(req.into()).await?;

    Ok(ApiResponse::created(Envelope::with_message(
        "User registered successfully",
        AuthTokenResponse {
            user: UserResponse::from(&output.user),
            token: output.token.into_inner(),
        },
    )))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/v1/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<SignInRequest>,
) -> AuthResult<ApiResponse<AuthTokenResponse>>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case.execute(req.into()).await?;

    Ok(ApiResponse::ok(Envelope::with_message(
        "Signed in successfully",
        AuthTokenResponse {
            user: UserResponse::from(&output.user),
            token: output.token.into_inner(),
        },
    )))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/v1/signout
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
    context: AuthContext,
) -> AuthResult<ApiResponse<()>>
where
    R: UserRepository + AccessTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignOutUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    use_case.execute(&context).await?;

    Ok(ApiResponse::ok(Envelope::message("Signed out successfully")))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/user
pub async fn current_user(context: AuthContext) -> ApiResponse<UserResponse> {
    ApiResponse::ok(Envelope::data(UserResponse::from(context.user)))
}
