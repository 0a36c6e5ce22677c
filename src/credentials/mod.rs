//! Credential storage
//!
//! Holds the session tokens and default tenant settings in a single JSON
//! file (`~/.spacectl` unless overridden) written with owner-only permissions.

mod models;
mod store;

pub use models::Credentials;
pub use store::CredentialStore;
