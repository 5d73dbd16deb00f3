//! Task prediction service: HTTP surface and configuration
//!
//! The prediction logic lives in `predictor-lib`; this crate wires it to
//! an axum API and process configuration. Exposed as a library so the
//! integration tests can drive the real router.

pub mod api;
pub mod config;
