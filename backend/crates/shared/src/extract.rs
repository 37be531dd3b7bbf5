//! Request extractors shared by every router

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// `Json<T>` whose rejection is rendered as a 422 failure envelope
///
/// A missing or non-JSON `Content-Type`, an unreadable body, or a body that
/// does not fit `T` all become `success: false` responses instead of axum's
/// plain-text rejections.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let message = match &rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected a request with Content-Type: application/json".to_string()
        }
        JsonRejection::JsonSyntaxError(_) => "Malformed JSON body".to_string(),
        _ => rejection.body_text(),
    };
    AppError::unprocessable(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        title: Option<String>,
    }

    #[tokio::test]
    async fn test_accepts_json() {
        let req = HttpRequest::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"title":"hello"}"#))
            .unwrap();

        let JsonBody(payload) = JsonBody::<Payload>::from_request(req, &()).await.unwrap();
        assert_eq!(payload.title.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_syntax_error_is_422() {
        let req = HttpRequest::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let err = JsonBody::<Payload>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.message(), "Malformed JSON body");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_422() {
        let req = HttpRequest::builder()
            .method("POST")
            .body(Body::from(r#"{"title":"hello"}"#))
            .unwrap();

        let err = JsonBody::<Payload>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status_code(), 422);
    }
}
