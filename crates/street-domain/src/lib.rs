//! Domain types shared across Street services.
//!
//! This crate contains only pure types and pure functions with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod id_format;
pub mod policy;
pub mod principal;
pub mod sales;
pub mod session;
