//! Bearer Credential Extraction
//!
//! The storefront client sends its access token in the `Authorization`
//! header as the raw token string (no `Bearer ` prefix). The extractor
//! accepts both the raw form and the standard prefixed form.

use axum::http::{HeaderMap, header};

/// Extract the access token from the `Authorization` header
///
/// Returns `None` when the header is absent, empty, or not valid UTF-8.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?.trim();

    let token = match raw.strip_prefix("Bearer ") {
        Some(rest) => rest.trim(),
        None => raw,
    };

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_raw_token() {
        let headers = headers_with_auth("abc.def");
        assert_eq!(extract_bearer_token(&headers), Some("abc.def".to_string()));
    }

    #[test]
    fn test_extract_prefixed_token() {
        let headers = headers_with_auth("Bearer abc.def");
        assert_eq!(extract_bearer_token(&headers), Some("abc.def".to_string()));
    }

    #[test]
    fn test_extract_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_extract_empty_header() {
        let headers = headers_with_auth("");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_extract_prefix_only() {
        let headers = headers_with_auth("Bearer ");
        assert_eq!(extract_bearer_token(&headers), None);
    }
}
