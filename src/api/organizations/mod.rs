//! Organization module

mod api;
mod commands;
mod models;
mod resolver;

pub use commands::run_org_command;
pub use models::{Invitation, Organization, OrganizationMembership};
pub use resolver::resolve_organization_id;
