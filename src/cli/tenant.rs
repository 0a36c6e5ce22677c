//! `tenant` command definitions and arguments

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Tenant subcommands
#[derive(Subcommand, Debug)]
pub enum TenantCommand {
    /// List tenants of a project (first project if none given)
    #[command(visible_alias = "ls")]
    List(TenantListArgs),

    /// Create a tenant
    Create(TenantCreateArgs),

    /// Show one tenant
    Get(TenantTarget),

    /// Show the provisioning status of a tenant
    Status(TenantTarget),

    /// Change a tenant's Kubernetes version or quotas
    Update(TenantUpdateArgs),

    /// Delete a tenant
    #[command(visible_alias = "rm")]
    Delete(TenantDeleteArgs),

    /// Print or save the kubeconfig of a tenant
    Kubeconfig(TenantKubeconfigArgs),

    /// Run kubectl against a tenant
    #[command(
        after_help = "Examples:\n  spacectl tenant kubectl --name my-tenant --project-name my-project -- get pods\n  spacectl tenant kubectl --id abc123 -- get nodes"
    )]
    Kubectl(TenantKubectlArgs),

    /// List available tenant locations
    Locations,

    /// List supported cloud providers
    Clouds,

    /// List regions of a cloud provider
    Regions(RegionsArgs),

    /// List zones of a region
    Zones(ZonesArgs),

    /// List supported Kubernetes versions
    K8sVersions,
}

/// Project scope given by `--project` or `--project-name`
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectScope {
    /// Project ID
    #[arg(long)]
    pub project: Option<String>,

    /// Project name
    #[arg(long)]
    pub project_name: Option<String>,
}

/// Tenant picked by `--id`, or by `--name` inside a project
#[derive(Args, Debug, Clone, Default)]
pub struct TenantTarget {
    /// Tenant ID
    #[arg(long)]
    pub id: Option<String>,

    /// Tenant name (requires --project or --project-name)
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub scope: ProjectScope,
}

#[derive(Args, Debug)]
pub struct TenantListArgs {
    #[command(flatten)]
    pub scope: ProjectScope,

    /// List tenants from all projects
    #[arg(long, default_value_t = false, conflicts_with_all = ["project", "project_name"])]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct TenantCreateArgs {
    /// Tenant name
    pub name: String,

    #[command(flatten)]
    pub scope: ProjectScope,

    /// Cloud provider
    #[arg(long)]
    pub cloud: Option<String>,

    /// Region
    #[arg(long)]
    pub region: Option<String>,

    /// Kubernetes version (server default if omitted)
    #[arg(long)]
    pub k8s_version: Option<String>,

    /// Compute quota (cores)
    #[arg(long)]
    pub compute: Option<u32>,

    /// Memory quota (GB)
    #[arg(long)]
    pub memory: Option<u32>,

    /// Namespace suffix
    #[arg(long, default_value = "")]
    pub namespace_suffix: String,
}

#[derive(Args, Debug)]
pub struct TenantUpdateArgs {
    #[command(flatten)]
    pub target: TenantTarget,

    /// New Kubernetes version
    #[arg(long)]
    pub k8s_version: Option<String>,

    /// New compute quota (cores)
    #[arg(long)]
    pub compute: Option<u32>,

    /// New memory quota (GB)
    #[arg(long)]
    pub memory: Option<u32>,
}

#[derive(Args, Debug)]
pub struct TenantDeleteArgs {
    #[command(flatten)]
    pub target: TenantTarget,

    /// Skip confirmation prompt
    #[arg(short = 'f', long, default_value_t = false)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct TenantKubeconfigArgs {
    /// Tenant ID
    pub id: String,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub output_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TenantKubectlArgs {
    #[command(flatten)]
    pub target: TenantTarget,

    /// Skip the cache and fetch a fresh kubeconfig
    #[arg(long, default_value_t = false)]
    pub no_cache: bool,

    /// Arguments passed to kubectl
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "KUBECTL_ARGS")]
    pub args: Vec<String>,
}

#[derive(Args, Debug)]
pub struct RegionsArgs {
    /// Cloud provider
    #[arg(long)]
    pub cloud: String,
}

#[derive(Args, Debug)]
pub struct ZonesArgs {
    /// Cloud provider
    #[arg(long)]
    pub cloud: String,

    /// Region
    #[arg(long)]
    pub region: String,
}
