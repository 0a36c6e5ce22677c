//! Kubespaces API client and resource modules
//!
//! Each resource lives in its own module with the same layout: `models`
//! for the wire types, `api` for the [`ApiClient`] methods, `resolver` for
//! turning names into IDs and `commands` for the CLI handlers.

mod client;
mod redact;
mod selector;

pub mod auth;
pub mod models;
pub mod organizations;
pub mod projects;
pub mod tenants;

pub use client::{ApiClient, ApiResponse, ErrorResponse};
pub use selector::Selector;
