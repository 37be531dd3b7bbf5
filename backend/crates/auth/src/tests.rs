//! Unit tests for auth crate

#[cfg(test)]
mod fixtures {
    use std::sync::Arc;

    use crate::application::config::AuthConfig;
    use crate::application::credentials::NewUserInput;
    use crate::infra::memory::MemoryAuthRepository;

    pub fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::for_tests())
    }

    pub fn repo() -> Arc<MemoryAuthRepository> {
        Arc::new(MemoryAuthRepository::new())
    }

    pub fn new_user(name: &str, email: &str, password: &str) -> NewUserInput {
        NewUserInput {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
            password_confirmation: Some(password.into()),
        }
    }
}

#[cfg(test)]
mod credential_store_tests {
    use super::fixtures::*;
    use crate::application::credentials::CredentialStore;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::{email::Email, user_password::RawPassword};
    use crate::error::AuthError;

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let repo = repo();
        let store = CredentialStore::new(repo.clone(), config());

        let user = store
            .create_user(new_user("Ann", "ann@example.com", "secret-pass"))
            .await
            .unwrap();

        let stored = repo
            .find_by_email(&Email::new("ann@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.user_id, user.user_id);
        assert!(stored.password_hash.as_phc_string().starts_with("$argon2id$"));
        assert!(!stored.password_hash.as_phc_string().contains("secret-pass"));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let store = CredentialStore::new(repo(), config());
        store
            .create_user(new_user("Ann", "ann@example.com", "secret-pass"))
            .await
            .unwrap();

        let err = store
            .create_user(new_user("Other Ann", "ann@example.com", "another-pass"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_email_uniqueness_is_case_sensitive() {
        let store = CredentialStore::new(repo(), config());
        store
            .create_user(new_user("Ann", "ann@example.com", "secret-pass"))
            .await
            .unwrap();

        assert!(
            store
                .create_user(new_user("Ann", "Ann@example.com", "secret-pass"))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_invalid_input_stores_nothing() {
        let repo = repo();
        let store = CredentialStore::new(repo.clone(), config());

        let err = store
            .create_user(new_user("", "ann@example.com", "short"))
            .await
            .unwrap_err();
        let AuthError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.has("name"));
        assert!(errors.has("password"));

        assert!(
            repo.find_by_email(&Email::new("ann@example.com").unwrap())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_verify_credentials() {
        let store = CredentialStore::new(repo(), config());
        let user = store
            .create_user(new_user("Ann", "ann@example.com", "secret-pass"))
            .await
            .unwrap();

        let found = store
            .verify_credentials(
                "ann@example.com",
                RawPassword::submitted("secret-pass".to_string()),
            )
            .await
            .unwrap();
        assert_eq!(found.user_id, user.user_id);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_the_same() {
        let store = CredentialStore::new(repo(), config());
        store
            .create_user(new_user("Ann", "ann@example.com", "secret-pass"))
            .await
            .unwrap();

        let wrong_password = store
            .verify_credentials(
                "ann@example.com",
                RawPassword::submitted("not-the-pass".to_string()),
            )
            .await
            .unwrap_err();
        let unknown_email = store
            .verify_credentials(
                "nobody@example.com",
                RawPassword::submitted("secret-pass".to_string()),
            )
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_pepper_must_match() {
        let repo = repo();
        let peppered = std::sync::Arc::new(
            crate::AuthConfig::for_tests().with_pepper(b"server-secret".to_vec()),
        );
        CredentialStore::new(repo.clone(), peppered)
            .create_user(new_user("Ann", "ann@example.com", "secret-pass"))
            .await
            .unwrap();

        let without_pepper = CredentialStore::new(repo, config());
        assert!(
            without_pepper
                .verify_credentials(
                    "ann@example.com",
                    RawPassword::submitted("secret-pass".to_string()),
                )
                .await
                .is_err()
        );
    }
}

#[cfg(test)]
mod token_authority_tests {
    use std::time::Duration;

    use super::fixtures::*;
    use crate::application::credentials::CredentialStore;
    use crate::application::token_authority::TokenAuthority;
    use crate::domain::repository::AccessTokenRepository;
    use crate::domain::value_object::token_secret::TokenSecret;
    use crate::error::AuthError;

    #[tokio::test]
    async fn test_issue_then_resolve() {
        let repo = repo();
        let user = CredentialStore::new(repo.clone(), config())
            .create_user(new_user("Ann", "ann@example.com", "secret-pass"))
            .await
            .unwrap();
        let authority = TokenAuthority::new(repo.clone(), repo.clone(), config());

        let secret = authority.issue(user.user_id).await.unwrap();
        let context = authority.resolve(&secret).await.unwrap();

        assert_eq!(context.user_id(), user.user_id);
        assert_eq!(context.user.email, "ann@example.com");
    }

    #[tokio::test]
    async fn test_only_digest_is_stored() {
        let repo = repo();
        let user = CredentialStore::new(repo.clone(), config())
            .create_user(new_user("Ann", "ann@example.com", "secret-pass"))
            .await
            .unwrap();
        let authority = TokenAuthority::new(repo.clone(), repo.clone(), config());

        let secret = authority.issue(user.user_id).await.unwrap();
        let stored = repo.find_by_hash(&secret.digest()).await.unwrap().unwrap();

        assert_eq!(stored.name, "auth_token");
        assert_ne!(stored.token_hash.as_slice(), secret.expose().as_bytes());
    }

    #[tokio::test]
    async fn test_unknown_token_is_unauthenticated() {
        let repo = repo();
        let authority = TokenAuthority::new(repo.clone(), repo, config());

        let err = authority
            .resolve(&TokenSecret::presented("made-up"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_revoke_only_affects_presented_token() {
        let repo = repo();
        let user = CredentialStore::new(repo.clone(), config())
            .create_user(new_user("Ann", "ann@example.com", "secret-pass"))
            .await
            .unwrap();
        let authority = TokenAuthority::new(repo.clone(), repo.clone(), config());

        let first = authority.issue(user.user_id).await.unwrap();
        let second = authority.issue(user.user_id).await.unwrap();
        assert_eq!(repo.token_count(&user.user_id).await, 2);

        let context = authority.resolve(&first).await.unwrap();
        authority.revoke(&context.token_id).await.unwrap();

        assert!(authority.resolve(&first).await.is_err());
        assert!(authority.resolve(&second).await.is_ok());
        assert_eq!(repo.token_count(&user.user_id).await, 1);

        // Second revoke of the same token finds nothing
        assert!(authority.revoke(&context.token_id).await.is_err());
    }

    #[tokio::test]
    async fn test_resolve_records_last_use() {
        let repo = repo();
        let user = CredentialStore::new(repo.clone(), config())
            .create_user(new_user("Ann", "ann@example.com", "secret-pass"))
            .await
            .unwrap();
        let authority = TokenAuthority::new(repo.clone(), repo.clone(), config());
        let secret = authority.issue(user.user_id).await.unwrap();

        authority.resolve(&secret).await.unwrap();

        // Touch runs on a spawned task
        let mut last_used = None;
        for _ in 0..50 {
            last_used = repo
                .find_by_hash(&secret.digest())
                .await
                .unwrap()
                .and_then(|t| t.last_used_at);
            if last_used.is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(last_used.is_some());
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::config::AuthConfig;
    use crate::infra::memory::MemoryAuthRepository;
    use crate::presentation::{AuthAppState, auth_router, current_user_router};

    fn app() -> Router {
        let state = AuthAppState::new(MemoryAuthRepository::new(), AuthConfig::for_tests());
        Router::new()
            .nest("/api/v1", auth_router(state.clone()))
            .nest("/api", current_user_router(state))
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn sign_up(app: &Router) -> String {
        let (status, body) = send(
            app,
            post_json(
                "/api/v1/signup",
                json!({
                    "name": "Ann",
                    "email": "ann@example.com",
                    "password": "secret-pass",
                    "password_confirmation": "secret-pass"
                }),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_signup_envelope() {
        let app = app();
        let (status, body) = send(
            &app,
            post_json(
                "/api/v1/signup",
                json!({
                    "name": "Ann",
                    "email": "ann@example.com",
                    "password": "secret-pass",
                    "password_confirmation": "secret-pass"
                }),
                None,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "User registered successfully");
        assert_eq!(body["data"]["user"]["email"], "ann@example.com");
        assert!(body["data"]["user"].get("password_hash").is_none());
        assert!(!body["data"]["token"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let app = app();
        sign_up(&app).await;

        let (status, body) = send(
            &app,
            post_json(
                "/api/v1/signup",
                json!({
                    "name": "Ann Again",
                    "email": "ann@example.com",
                    "password": "secret-pass",
                    "password_confirmation": "secret-pass"
                }),
                None,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(body["errors"]["email"][0], "The email has already been taken.");
    }

    #[tokio::test]
    async fn test_signin_wrong_password() {
        let app = app();
        sign_up(&app).await;

        let (status, body) = send(
            &app,
            post_json(
                "/api/v1/signin",
                json!({"email": "ann@example.com", "password": "nope-nope"}),
                None,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({"success": false, "message": "Invalid credentials"})
        );
    }

    #[tokio::test]
    async fn test_signin_missing_fields() {
        let app = app();
        let (status, body) = send(&app, post_json("/api/v1/signin", json!({}), None)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["errors"]["email"].is_array());
        assert!(body["errors"]["password"].is_array());
    }

    #[tokio::test]
    async fn test_signout_requires_token() {
        let app = app();
        let (status, body) = send(&app, post_json("/api/v1/signout", json!({}), None)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Unauthenticated.");
    }

    #[tokio::test]
    async fn test_signout_revokes_token() {
        let app = app();
        let token = sign_up(&app).await;

        let (status, body) =
            send(&app, post_json("/api/v1/signout", json!({}), Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Signed out successfully");

        let (status, _) = send(&app, post_json("/api/v1/signout", json!({}), Some(&token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_current_user() {
        let app = app();
        let token = sign_up(&app).await;

        let req = Request::builder()
            .uri("/api/user")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Ann");
        assert_eq!(body["data"]["email"], "ann@example.com");
    }

    #[tokio::test]
    async fn test_malformed_json_is_422() {
        let app = app();
        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/signup")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\":"))
            .unwrap();
        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_signup_wrong_json_types_are_field_errors() {
        let app = app();
        let (status, body) = send(
            &app,
            post_json(
                "/api/v1/signup",
                json!({
                    "name": 42,
                    "email": "",
                    "password": ["password1"],
                    "password_confirmation": "password1"
                }),
                None,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"]["name"][0], "The name field must be a string.");
        assert_eq!(body["errors"]["email"][0], "The email field is required.");
        assert_eq!(body["errors"]["password"][0], "The password field must be a string.");
    }

    #[tokio::test]
    async fn test_signin_blank_password_is_required() {
        let app = app();
        sign_up(&app).await;

        let (status, body) = send(
            &app,
            post_json(
                "/api/v1/signin",
                json!({"email": "ann@example.com", "password": "   "}),
                None,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"]["password"][0], "The password field is required.");
        assert!(body["errors"]["email"].is_null());
    }
}
