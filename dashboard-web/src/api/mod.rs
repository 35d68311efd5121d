//! Typed HTTP client for the backend microservices.
//!
//! [`client::ApiClient`] owns the base URL and bearer token and performs all
//! outbound HTTP. Each feature center contributes an `impl ApiClient` block
//! with its endpoint wrappers: fixed path + payload shape, field remapping
//! only, no control logic.

pub mod auth;
pub mod chat;
pub mod client;
pub mod cloud;
pub mod cost;
pub mod dashboard;
pub mod error;
pub mod finops;
pub mod knowledge;
pub mod ml;
pub mod plugins;
pub mod security;
pub mod sre;

pub use client::ApiClient;
pub use error::ApiError;
