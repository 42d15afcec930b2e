//! `Authorization: Bearer <token>` parsing.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use http::HeaderMap;
use http::header::AUTHORIZATION;
use http::request::Parts;

const SCHEME_PREFIX: &str = "bearer ";

/// Extract the token from an `Authorization` header value.
///
/// The value must start with `bearer ` (any case); the token is the second
/// whitespace-delimited field. Returns `None` for any other shape.
pub fn parse_bearer(header: &str) -> Option<&str> {
    let prefix = header.get(..SCHEME_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(SCHEME_PREFIX) {
        return None;
    }
    header.split_whitespace().nth(1)
}

/// Raw `Authorization` header, if present and valid UTF-8.
///
/// Never rejects: deciding whether a missing or malformed credential is an error is left to
/// the identity resolver.
#[derive(Debug, Clone, Default)]
pub struct BearerCredential(pub Option<String>);

impl BearerCredential {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self(
            headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned),
        )
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for BearerCredential
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let credential = Self::from_headers(&parts.headers);

        async move { Ok(credential) }
    }
}
