//! `project` command definitions and arguments

use clap::{Args, Subcommand};

use crate::config::defaults;

use super::org::InvitationIdArgs;

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    /// List projects of an organization (default organization if none given)
    #[command(visible_alias = "ls")]
    List(ProjectListArgs),

    /// Create a project
    Create(ProjectCreateArgs),

    /// Show one project
    Get(ProjectTarget),

    /// Update a project; omitted values keep their current setting
    Update(ProjectUpdateArgs),

    /// Change only a project's quotas
    Quotas(ProjectQuotasArgs),

    /// Delete a project
    #[command(visible_alias = "rm")]
    Delete(ProjectDeleteArgs),

    /// Manage project members
    Members {
        #[command(subcommand)]
        command: ProjectMembersCommand,
    },

    /// Invite a user to a project by email
    Invite(ProjectInviteArgs),

    /// List invitations of a project, or your own pending ones
    Invitations(ProjectTarget),

    /// Accept a project invitation addressed to you
    Accept(InvitationIdArgs),

    /// Decline a project invitation addressed to you
    Decline(InvitationIdArgs),
}

/// Organization scope given by `--org` or `--org-name`
#[derive(Args, Debug, Clone, Default)]
pub struct OrgScope {
    /// Organization ID
    #[arg(long)]
    pub org: Option<String>,

    /// Organization name
    #[arg(long)]
    pub org_name: Option<String>,
}

/// Project picked by `--project-id` or `--project-name`
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectTarget {
    /// Project ID
    #[arg(long)]
    pub project_id: Option<String>,

    /// Project name
    #[arg(long)]
    pub project_name: Option<String>,
}

#[derive(Args, Debug)]
pub struct ProjectListArgs {
    #[command(flatten)]
    pub scope: OrgScope,

    /// List projects from all organizations
    #[arg(long, default_value_t = false, conflicts_with_all = ["org", "org_name"])]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct ProjectCreateArgs {
    /// Project name
    pub name: String,

    #[command(flatten)]
    pub scope: OrgScope,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,

    /// Maximum number of tenants
    #[arg(long, default_value_t = 0)]
    pub max_tenants: i32,

    /// Maximum compute quota
    #[arg(long, default_value_t = 0)]
    pub max_compute: i32,

    /// Maximum memory quota (GB)
    #[arg(long, default_value_t = 0)]
    pub max_memory: i32,
}

#[derive(Args, Debug)]
pub struct ProjectUpdateArgs {
    #[command(flatten)]
    pub target: ProjectTarget,

    /// New project name
    #[arg(long)]
    pub name: Option<String>,

    /// New project description
    #[arg(long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub quotas: QuotaArgs,
}

#[derive(Args, Debug)]
pub struct ProjectQuotasArgs {
    #[command(flatten)]
    pub target: ProjectTarget,

    #[command(flatten)]
    pub quotas: QuotaArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct QuotaArgs {
    /// New maximum number of tenants
    #[arg(long)]
    pub max_tenants: Option<i32>,

    /// New maximum compute quota
    #[arg(long)]
    pub max_compute: Option<i32>,

    /// New maximum memory quota (GB)
    #[arg(long)]
    pub max_memory: Option<i32>,
}

#[derive(Args, Debug)]
pub struct ProjectDeleteArgs {
    /// Project ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'f', long, default_value_t = false)]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum ProjectMembersCommand {
    /// List members of a project
    #[command(visible_alias = "ls")]
    List(ProjectTarget),

    /// Add a user to a project
    Add(ProjectMemberRoleArgs),

    /// Remove a user from a project
    #[command(visible_alias = "rm")]
    Remove(ProjectMemberRemoveArgs),

    /// Change a member's role
    SetRole(ProjectMemberRoleArgs),
}

#[derive(Args, Debug)]
pub struct ProjectMemberRoleArgs {
    #[command(flatten)]
    pub target: ProjectTarget,

    /// User ID
    #[arg(long)]
    pub user: String,

    /// Role (admin, member)
    #[arg(long)]
    pub role: String,
}

#[derive(Args, Debug)]
pub struct ProjectMemberRemoveArgs {
    /// Project ID
    pub project_id: String,

    /// User ID
    pub user_id: String,
}

#[derive(Args, Debug)]
pub struct ProjectInviteArgs {
    #[command(flatten)]
    pub target: ProjectTarget,

    /// Email address to invite
    #[arg(long)]
    pub email: String,

    /// Role granted on acceptance
    #[arg(long, default_value = defaults::ROLE)]
    pub role: String,
}
