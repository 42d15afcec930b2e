//! Session tokens handed back to the client after sign-up / sign-in.

use serde::{Deserialize, Serialize};

/// Token type reported when the identity service omits one.
pub const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// Session as returned by the external identity service, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamSession {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_type: String,
}

/// Normalize an upstream session.
///
/// Returns `None` when there is no session or it carries no access token. An absent or
/// empty `token_type` becomes [`DEFAULT_TOKEN_TYPE`].
pub fn to_session(session: Option<UpstreamSession>) -> Option<AuthSession> {
    let session = session?;
    let access_token = session.access_token.filter(|t| !t.is_empty())?;
    let token_type = session
        .token_type
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TOKEN_TYPE.to_owned());
    Some(AuthSession {
        access_token,
        refresh_token: session.refresh_token,
        token_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_none_without_session() {
        assert_eq!(to_session(None), None);
    }

    #[test]
    fn should_return_none_without_access_token() {
        let upstream = UpstreamSession {
            access_token: None,
            refresh_token: Some("r".into()),
            token_type: Some("bearer".into()),
        };
        assert_eq!(to_session(Some(upstream)), None);
    }

    #[test]
    fn should_return_none_with_empty_access_token() {
        let upstream = UpstreamSession {
            access_token: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(to_session(Some(upstream)), None);
    }

    #[test]
    fn should_default_token_type_when_absent_or_empty() {
        for token_type in [None, Some(String::new())] {
            let session = to_session(Some(UpstreamSession {
                access_token: Some("a".into()),
                refresh_token: None,
                token_type,
            }))
            .unwrap();
            assert_eq!(session.token_type, "bearer");
            assert_eq!(session.refresh_token, None);
        }
    }

    #[test]
    fn should_keep_upstream_token_type() {
        let session = to_session(Some(UpstreamSession {
            access_token: Some("a".into()),
            refresh_token: Some("r".into()),
            token_type: Some("mac".into()),
        }))
        .unwrap();
        assert_eq!(session.access_token, "a");
        assert_eq!(session.refresh_token.as_deref(), Some("r"));
        assert_eq!(session.token_type, "mac");
    }
}
