//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the dashboard frontend and the
//! backend microservices (auth, cloud integrations, cost/security/ML/SRE
//! agents). All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: the uniform `{success, data, error}` response envelope
//!   - **[`dto::auth`]**: authentication payloads and the client-side `User` model
//!   - **[`dto::cloud`]**, **[`dto::dashboard`]**, **[`dto::cost`]**,
//!     **[`dto::security`]**, **[`dto::chat`]**, **[`dto::ml`]**,
//!     **[`dto::finops`]**, **[`dto::sre`]**, **[`dto::plugins`]**,
//!     **[`dto::knowledge`]**: per-feature-center payloads
//! - **[`utils`]**: shared display helpers
//!
//! ## Wire Format
//!
//! - Field names use **snake_case** in Rust and on the wire; the few backend
//!   fields that deviate carry an explicit `#[serde(rename)]`.
//! - Optional fields are omitted from JSON when `None`
//!   (`#[serde(skip_serializing_if = "Option::is_none")]`).
//! - Responses are either already wrapped in the envelope by the backend or
//!   are bare payloads the client wraps itself; see [`dto::envelope::ApiResponse`].

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
