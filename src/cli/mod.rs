//! CLI argument parsing

mod auth;
mod common;
mod org;
mod project;
mod tenant;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use auth::{AuthCommand, GithubLoginArgs, LoginArgs, RegisterArgs, ResendArgs, VerifyArgs};
pub use common::{OutputFormat, RunContext};
pub use org::{
    InvitationIdArgs, OrgCommand, OrgCreateArgs, OrgDeleteArgs, OrgInvitationsArgs,
    OrgInviteArgs, OrgMemberArgs, OrgMemberRoleArgs, OrgMembersCommand, OrgTarget, OrgUpdateArgs,
};
pub use project::{
    OrgScope, ProjectCommand, ProjectCreateArgs, ProjectDeleteArgs, ProjectInviteArgs,
    ProjectListArgs, ProjectMemberRemoveArgs, ProjectMemberRoleArgs, ProjectMembersCommand,
    ProjectQuotasArgs, ProjectTarget, ProjectUpdateArgs, QuotaArgs,
};
pub use tenant::{
    ProjectScope, RegionsArgs, TenantCommand, TenantCreateArgs, TenantDeleteArgs,
    TenantKubeconfigArgs, TenantKubectlArgs, TenantListArgs, TenantTarget, TenantUpdateArgs,
    ZonesArgs,
};

/// Kubespaces command line client
#[derive(Parser, Debug)]
#[command(name = "spacectl")]
#[command(version)]
#[command(
    about = "Manage Kubespaces organizations, projects and tenants",
    long_about = None
)]
pub struct Cli {
    /// API base URL (overrides the stored one)
    #[arg(long, global = true, env = "SPACECTL_API_URL")]
    pub api_url: Option<String>,

    /// Output format (table, csv, json, yaml)
    #[arg(short = 'o', long, global = true, default_value = defaults::OUTPUT)]
    pub output: String,

    /// Omit the header row in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_headers: bool,

    /// Suppress success messages and spinners
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    /// Log API requests and responses (secrets redacted)
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Credentials file (default ~/.spacectl)
    #[arg(long, global = true, env = "SPACECTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, env = "SPACECTL_LOG", default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the spacectl version
    Version,

    /// Show the signed-in user
    Whoami,

    /// Create an account
    Register(RegisterArgs),

    /// Log in, log out and verify your email
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Manage organizations
    #[command(visible_alias = "orgs")]
    Org {
        #[command(subcommand)]
        command: OrgCommand,
    },

    /// Manage projects
    #[command(visible_alias = "projects")]
    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },

    /// Manage tenants
    #[command(visible_alias = "tenants")]
    Tenant {
        #[command(subcommand)]
        command: TenantCommand,
    },
}

impl Command {
    /// Whether the command needs a stored session
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Command::Version | Command::Register(_) | Command::Auth { .. }
        )
    }
}
