//! spacectl - command line client for the Kubespaces API
//!
//! Manage organizations, projects and Kubernetes tenants from the terminal.
//!
//! # Features
//!
//! - Email/password and GitHub login with automatic token refresh
//! - Organizations, projects and tenants, including members and invitations
//! - Multiple output formats (table, CSV, JSON, YAML)
//! - `kubectl` passthrough with a cached per-tenant kubeconfig
//!
//! # Example
//!
//! ```bash
//! # Log in
//! spacectl auth login --email me@example.com
//!
//! # List projects of the default organization
//! spacectl project list
//!
//! # Create a tenant and talk to it
//! spacectl tenant create dev --project-name web
//! spacectl tenant kubectl --name dev --project-name web -- get pods
//!
//! # Output as JSON
//! spacectl tenant list --all -o json
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod output;
pub mod ui;

pub use api::auth::{run_auth_command, run_register, run_whoami, User};
pub use api::organizations::{run_org_command, Organization, OrganizationMembership};
pub use api::projects::{run_project_command, Project};
pub use api::tenants::{run_tenant_command, Tenant};
pub use api::{ApiClient, Selector};
pub use cli::{Cli, Command, OutputFormat, RunContext};
pub use credentials::{CredentialStore, Credentials};
pub use error::{Result, SpaceError};
pub use output::Formatter;
