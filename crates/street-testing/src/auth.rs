//! Mock auth helpers for integration tests.

use http::header::AUTHORIZATION;
use http::{HeaderName, HeaderValue};

/// `Authorization: Bearer <token>` as a name/value pair, ready for `add_header`.
pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    raw_authorization(&format!("Bearer {token}"))
}

/// An arbitrary `Authorization` value, for exercising malformed credentials.
pub fn raw_authorization(value: &str) -> (HeaderName, HeaderValue) {
    (AUTHORIZATION, HeaderValue::from_str(value).unwrap())
}
