use axum::http::HeaderMap;

use crate::error::AuthError;

/// Pulls the bearer token out of the `Authorization` header.
pub fn extract_access_token_from_request_headers(
    headers: &HeaderMap,
) -> Result<String, AuthError> {
    let value = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?;

    let value = value.to_str().map_err(|_| AuthError::MalformedAuthHeader)?;

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(AuthError::MalformedAuthHeader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    #[test]
    fn test_extracts_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(
            extract_access_token_from_request_headers(&headers).unwrap(),
            "abc.def.ghi"
        );
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert!(matches!(
            extract_access_token_from_request_headers(&headers),
            Err(AuthError::MissingAuthHeader)
        ));
    }

    #[test]
    fn test_rejects_non_bearer_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic dXNlcjpwdw==".parse().unwrap());
        assert!(matches!(
            extract_access_token_from_request_headers(&headers),
            Err(AuthError::MalformedAuthHeader)
        ));
    }
}
