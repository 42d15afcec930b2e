//! Service plumbing shared across Street services: configuration, tracing, health probes,
//! HTTP middleware and shutdown handling.

pub mod config;
pub mod health;
pub mod middleware;
pub mod shutdown;
pub mod tracing;
