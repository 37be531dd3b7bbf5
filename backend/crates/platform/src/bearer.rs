//! Bearer credential parsing (`Authorization: Bearer <token>`)

use http::HeaderMap;
use http::header::AUTHORIZATION;

/// Extract the token from an `Authorization` header
///
/// The scheme is matched as `Bearer` or `bearer`; surrounding whitespace is
/// ignored. Returns `None` when the header is absent, not valid ASCII, uses
/// another scheme, or carries an empty token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let trimmed = value.trim();
    let token = trimmed
        .strip_prefix("Bearer ")
        .or_else(|| trimmed.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        map
    }

    #[test]
    fn test_extracts_token() {
        assert_eq!(extract_bearer_token(&headers("Bearer abc123")), Some("abc123"));
        assert_eq!(extract_bearer_token(&headers("bearer  abc123 ")), Some("abc123"));
    }

    #[test]
    fn test_rejects_other_forms() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
        assert_eq!(extract_bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(extract_bearer_token(&headers("Bearer ")), None);
        assert_eq!(extract_bearer_token(&headers("abc123")), None);
    }
}
