//! Response Envelope
//!
//! Every JSON body the API returns has the same outer shape:
//!
//! ```json
//! { "success": true, "message": "...", "data": { ... } }
//! { "success": false, "message": "...", "errors": { "field": ["..."] } }
//! ```
//!
//! Absent members are omitted rather than sent as `null`.

use std::borrow::Cow;

use serde::Serialize;

use crate::validation::FieldErrors;

/// JSON レスポンスの外側の形
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl<T> Envelope<T> {
    /// `success: true` with a payload and no message
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            errors: None,
        }
    }

    /// `success: true` with a payload and a message
    pub fn with_message(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            errors: None,
        }
    }

    /// `success: false`
    pub fn failure(message: impl Into<Cow<'static, str>>, errors: Option<FieldErrors>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            errors,
        }
    }
}

impl Envelope<()> {
    /// `success: true` with only a message
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            errors: None,
        }
    }
}

/// エンベロープと HTTP ステータスの組
///
/// Handlers return this for every successful outcome so the status code
/// travels with the body it belongs to.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    status: u16,
    envelope: Envelope<T>,
}

impl<T> ApiResponse<T> {
    /// 200 OK
    pub fn ok(envelope: Envelope<T>) -> Self {
        Self {
            status: 200,
            envelope,
        }
    }

    /// 201 Created
    pub fn created(envelope: Envelope<T>) -> Self {
        Self {
            status: 201,
            envelope,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    pub fn envelope(&self) -> &Envelope<T> {
        &self.envelope
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::StatusCode;

        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self.envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_with_message_and_data() {
        let env = Envelope::with_message("Post created successfully", json!({"id": 1}));
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({
                "success": true,
                "message": "Post created successfully",
                "data": {"id": 1}
            })
        );
    }

    #[test]
    fn test_message_only_omits_data() {
        let env = Envelope::message("Signed out successfully");
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"success": true, "message": "Signed out successfully"})
        );
    }

    #[test]
    fn test_data_only_omits_message() {
        let env = Envelope::data(vec![1, 2, 3]);
        let value = serde_json::to_value(&env).unwrap();
        assert!(value.get("message").is_none());
        assert_eq!(value["data"], json!([1, 2, 3]));
    }

    #[test]
    fn test_failure_without_errors() {
        let env: Envelope<()> = Envelope::failure("Invalid credentials", None);
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"success": false, "message": "Invalid credentials"})
        );
    }

    #[test]
    fn test_status_helpers() {
        assert_eq!(ApiResponse::created(Envelope::data(())).status_code(), 201);
        assert_eq!(ApiResponse::ok(Envelope::message("ok")).status_code(), 200);
    }
}
