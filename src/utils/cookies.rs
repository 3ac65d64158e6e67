//! Cookie header helpers.

use axum::http::{HeaderMap, header::COOKIE};

/// Returns the value of cookie `name` from the request `Cookie` headers.
///
/// Handles several cookies per header (`a=1; b=2`) and several `Cookie`
/// headers. Empty values are treated as absent.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name && !value.is_empty() => {
                    Some(value.to_string())
                }
                _ => None,
            }
        })
}

/// Builds a `Set-Cookie` header value for an HTTP-only, root-path cookie.
pub fn build_cookie(name: &str, value: &str, max_age_seconds: u64) -> String {
    format!("{name}={value}; Max-Age={max_age_seconds}; Path=/; HttpOnly")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_read_cookie_among_many() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; user_id=abc; user_token=def"),
        );

        assert_eq!(read_cookie(&headers, "user_id").as_deref(), Some("abc"));
        assert_eq!(read_cookie(&headers, "user_token").as_deref(), Some("def"));
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_read_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("a=1"));
        headers.append(COOKIE, HeaderValue::from_static("user_id=xyz"));

        assert_eq!(read_cookie(&headers, "user_id").as_deref(), Some("xyz"));
    }

    #[test]
    fn test_empty_value_is_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("user_id="));

        assert_eq!(read_cookie(&headers, "user_id"), None);
    }

    #[test]
    fn test_build_cookie() {
        assert_eq!(
            build_cookie("user_id", "abc", 120),
            "user_id=abc; Max-Age=120; Path=/; HttpOnly"
        );
    }
}
