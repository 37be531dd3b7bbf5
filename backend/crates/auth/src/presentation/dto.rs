//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::validation::TextInput;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{NewUserInput, SignInInput};
use crate::domain::entity::user::{AuthenticatedUser, User};

// ============================================================================
// Requests
// ============================================================================

/// Sign up request
///
/// Every member is optional and loosely typed at the wire level so that a
/// missing or wrongly typed field is reported as a validation error rather
/// than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUpRequest {
    pub name: Option<TextInput>,
    pub email: Option<TextInput>,
    pub password: Option<TextInput>,
    pub password_confirmation: Option<TextInput>,
}

impl From<SignUpRequest> for NewUserInput {
    fn from(req: SignUpRequest) -> Self {
        NewUserInput {
            name: req.name,
            email: req.email,
            password: req.password,
            password_confirmation: req.password_confirmation,
        }
    }
}

/// Sign in request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInRequest {
    pub email: Option<TextInput>,
    pub password: Option<TextInput>,
}

impl From<SignInRequest> for SignInInput {
    fn from(req: SignInRequest) -> Self {
        SignInInput {
            email: req.email,
            password: req.password,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Public user record
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.into_uuid(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<AuthenticatedUser> for UserResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.user_id.into_uuid(),
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Sign up / sign in payload
#[derive(Debug, Clone, Serialize)]
pub struct AuthTokenResponse {
    pub user: UserResponse,
    /// Plain-text bearer token; shown only here
    pub token: String,
}
