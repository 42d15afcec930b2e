//! Resolved caller identity.

use serde::Serialize;

/// User record as returned by the external identity service, before normalization.
///
/// Both fields are optional because the upstream contract does not guarantee them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamUser {
    pub id: Option<String>,
    pub email: Option<String>,
}

/// The identity service accepted a request but returned no usable user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("identity service did not return a user id")]
pub struct MalformedIdentity;

/// Verified identity of an authenticated caller.
///
/// Only constructed through [`Principal::new`] or [`Principal::from_upstream`], so `id` is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    id: String,
    email: String,
}

impl Principal {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Result<Self, MalformedIdentity> {
        let id = id.into();
        if id.is_empty() {
            return Err(MalformedIdentity);
        }
        Ok(Self {
            id,
            email: email.into(),
        })
    }

    /// Normalize an upstream user. A missing or empty email falls back to `fallback_email`.
    pub fn from_upstream(
        user: &UpstreamUser,
        fallback_email: &str,
    ) -> Result<Self, MalformedIdentity> {
        let id = user
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(MalformedIdentity)?;
        let email = user
            .email
            .as_deref()
            .filter(|email| !email.is_empty())
            .unwrap_or(fallback_email);
        Self::new(id, email)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(id: Option<&str>, email: Option<&str>) -> UpstreamUser {
        UpstreamUser {
            id: id.map(str::to_owned),
            email: email.map(str::to_owned),
        }
    }

    #[test]
    fn should_normalize_upstream_user() {
        let p = Principal::from_upstream(&upstream(Some("u-1"), Some("a@b.c")), "x@y.z").unwrap();
        assert_eq!(p.id(), "u-1");
        assert_eq!(p.email(), "a@b.c");
    }

    #[test]
    fn should_fall_back_to_default_email_when_missing() {
        let p = Principal::from_upstream(&upstream(Some("u-1"), None), "x@y.z").unwrap();
        assert_eq!(p.email(), "x@y.z");
    }

    #[test]
    fn should_fall_back_to_default_email_when_empty() {
        let p = Principal::from_upstream(&upstream(Some("u-1"), Some("")), "x@y.z").unwrap();
        assert_eq!(p.email(), "x@y.z");
    }

    #[test]
    fn should_reject_missing_id() {
        let result = Principal::from_upstream(&upstream(None, Some("a@b.c")), "");
        assert_eq!(result, Err(MalformedIdentity));
    }

    #[test]
    fn should_reject_empty_id() {
        let result = Principal::from_upstream(&upstream(Some(""), Some("a@b.c")), "");
        assert_eq!(result, Err(MalformedIdentity));
        assert_eq!(Principal::new("", "a@b.c"), Err(MalformedIdentity));
    }

    #[test]
    fn should_serialize_as_id_and_email() {
        let p = Principal::new("u-1", "a@b.c").unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "u-1", "email": "a@b.c" }));
    }
}
