//! Test utilities for Street services.
//!
//! Provides bearer-header helpers and `FakeGoTrue`, an in-process stand-in for the identity
//! service. Import from test code only.

pub mod auth;
pub mod gotrue;
