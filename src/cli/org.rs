//! `org` command definitions and arguments

use clap::{Args, Subcommand};

use crate::config::defaults;

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommand {
    /// List organizations you belong to
    #[command(visible_alias = "ls")]
    List,

    /// Create an organization
    Create(OrgCreateArgs),

    /// Show one organization
    Get(OrgTarget),

    /// Rename an organization
    Update(OrgUpdateArgs),

    /// Delete an organization
    #[command(visible_alias = "rm")]
    Delete(OrgDeleteArgs),

    /// Make an organization your default
    SetDefault(OrgTarget),

    /// Manage organization members
    Members {
        #[command(subcommand)]
        command: OrgMembersCommand,
    },

    /// Invite a user to an organization by email
    Invite(OrgInviteArgs),

    /// List invitations of an organization, or your own pending ones
    Invitations(OrgInvitationsArgs),

    /// Accept an invitation addressed to you
    Accept(InvitationIdArgs),

    /// Decline an invitation addressed to you
    Decline(InvitationIdArgs),
}

/// Organization picked by `--name` or `--id`
#[derive(Args, Debug, Clone, Default)]
pub struct OrgTarget {
    /// Organization name
    #[arg(long)]
    pub name: Option<String>,

    /// Organization ID
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Args, Debug)]
pub struct OrgCreateArgs {
    /// Organization name
    pub name: String,

    /// Optional description
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct OrgUpdateArgs {
    /// New organization name
    #[arg(long = "name")]
    pub new_name: String,

    /// Name of the organization to update
    #[arg(long)]
    pub org_name: Option<String>,

    /// ID of the organization to update
    #[arg(long)]
    pub org_id: Option<String>,
}

#[derive(Args, Debug)]
pub struct OrgDeleteArgs {
    #[command(flatten)]
    pub target: OrgTarget,

    /// Skip confirmation prompt
    #[arg(short = 'f', long, default_value_t = false)]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum OrgMembersCommand {
    /// Add a user to the organization
    Add(OrgMemberRoleArgs),

    /// Remove a user from the organization
    #[command(visible_alias = "rm")]
    Remove(OrgMemberArgs),

    /// Change a member's role
    SetRole(OrgMemberRoleArgs),
}

#[derive(Args, Debug)]
pub struct OrgMemberArgs {
    #[command(flatten)]
    pub target: OrgTarget,

    /// User ID
    #[arg(long)]
    pub user: String,
}

#[derive(Args, Debug)]
pub struct OrgMemberRoleArgs {
    #[command(flatten)]
    pub target: OrgTarget,

    /// User ID
    #[arg(long)]
    pub user: String,

    /// Role (admin, member)
    #[arg(long, default_value = defaults::ROLE)]
    pub role: String,
}

#[derive(Args, Debug)]
pub struct OrgInviteArgs {
    #[command(flatten)]
    pub target: OrgTarget,

    /// Email address to invite
    #[arg(long)]
    pub email: String,

    /// Role granted on acceptance
    #[arg(long, default_value = defaults::ROLE)]
    pub role: String,
}

#[derive(Args, Debug)]
pub struct OrgInvitationsArgs {
    #[command(flatten)]
    pub target: OrgTarget,
}

#[derive(Args, Debug)]
pub struct InvitationIdArgs {
    /// Invitation ID
    pub invitation_id: String,
}
