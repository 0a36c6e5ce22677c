//! Tenant module

mod api;
mod commands;
mod kubeconfig;
mod models;
mod resolver;

pub use commands::run_tenant_command;
pub use kubeconfig::{write_private, KubeconfigCache};
pub use models::{
    CreateTenantRequest, KubernetesVersion, Location, Tenant, TenantStatus, UpdateTenantRequest,
};
pub use resolver::{resolve_tenant_id, scoped_project_id};
