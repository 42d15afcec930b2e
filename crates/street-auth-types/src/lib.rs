//! Auth types shared across Street services.
//!
//! Provides bearer-credential parsing and the `BearerCredential` extractor.

pub mod bearer;
