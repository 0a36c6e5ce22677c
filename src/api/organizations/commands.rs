//! Organization command handlers

use log::debug;

use crate::api::{ApiClient, Selector};
use crate::cli::{OrgCommand, OrgMembersCommand, OrgTarget, RunContext};
use crate::error::Result;
use crate::ui::{confirm_deletion, finish_spinner};

use super::resolver::resolve_organization_id;

const TARGET_FLAGS: (&str, &str) = ("--name", "--id");

fn selector(target: &OrgTarget) -> Result<Selector<'_>> {
    Selector::pick(target.name.as_deref(), target.id.as_deref(), TARGET_FLAGS)
}

/// Run an `org` subcommand
pub async fn run_org_command(
    client: &mut ApiClient,
    ctx: &RunContext,
    command: &OrgCommand,
) -> Result<()> {
    match command {
        OrgCommand::List => {
            let spinner = ctx.spinner("Fetching organizations...");
            let result = client.list_organizations().await;
            finish_spinner(spinner);
            let memberships = result.map_err(|e| e.context("failed to list organizations"))?;
            debug!("Found {} organizations", memberships.len());
            ctx.formatter.print(&memberships)
        }
        OrgCommand::Create(args) => {
            let org = client
                .create_organization(&args.name, args.description.as_deref())
                .await
                .map_err(|e| e.context("failed to create organization"))?;
            ctx.formatter.print(&org)
        }
        OrgCommand::Get(target) => {
            let org = match selector(target)? {
                Selector::Name(name) => client.get_organization_by_name(name).await,
                Selector::Id(id) => client.get_organization(id).await,
            }
            .map_err(|e| e.context("failed to get organization"))?;
            ctx.formatter.print(&org)
        }
        OrgCommand::Update(args) => {
            let target = Selector::pick(
                args.org_name.as_deref(),
                args.org_id.as_deref(),
                ("--org-name", "--org-id"),
            )?;
            let id = resolve_organization_id(client, target).await?;
            let org = client
                .update_organization(&id, &args.new_name)
                .await
                .map_err(|e| e.context("failed to update organization"))?;
            ctx.formatter.print(&org)
        }
        OrgCommand::Delete(args) => {
            let target = selector(&args.target)?;
            let id = resolve_organization_id(client, target).await?;
            let prompt = format!(
                "Are you sure you want to delete organization '{}'? This action cannot be undone.",
                args.target.name.as_deref().unwrap_or(&id)
            );
            if !confirm_deletion(&prompt, args.force)? {
                ctx.success("Deletion cancelled.");
                return Ok(());
            }
            client
                .delete_organization(&id)
                .await
                .map_err(|e| e.context("failed to delete organization"))?;
            ctx.success(&format!("Successfully deleted organization {}", id));
            Ok(())
        }
        OrgCommand::SetDefault(target) => {
            let id = resolve_organization_id(client, selector(target)?).await?;
            client
                .set_default_organization(&id)
                .await
                .map_err(|e| e.context("failed to set default organization"))?;
            ctx.success(&format!("Successfully set organization {} as default", id));
            Ok(())
        }
        OrgCommand::Members { command } => run_members_command(client, ctx, command).await,
        OrgCommand::Invite(args) => {
            let id = resolve_organization_id(client, selector(&args.target)?).await?;
            client
                .send_organization_invitation(&id, &args.email, &args.role)
                .await
                .map_err(|e| e.context("failed to send invitation"))?;
            ctx.success(&format!(
                "Successfully invited {} to organization {} with role {}",
                args.email, id, args.role
            ));
            Ok(())
        }
        OrgCommand::Invitations(args) => {
            let target = Selector::optional(
                args.target.name.as_deref(),
                args.target.id.as_deref(),
                TARGET_FLAGS,
            )?;
            let invitations = match target {
                Some(target) => {
                    let id = resolve_organization_id(client, target).await?;
                    client.list_organization_invitations(&id).await
                }
                None => client.list_my_organization_invitations().await,
            }
            .map_err(|e| e.context("failed to list invitations"))?;
            ctx.formatter.print(&invitations)
        }
        OrgCommand::Accept(args) => {
            client
                .accept_organization_invitation(&args.invitation_id)
                .await
                .map_err(|e| e.context("failed to accept invitation"))?;
            ctx.success(&format!("Successfully accepted invitation {}", args.invitation_id));
            Ok(())
        }
        OrgCommand::Decline(args) => {
            client
                .decline_organization_invitation(&args.invitation_id)
                .await
                .map_err(|e| e.context("failed to decline invitation"))?;
            ctx.success(&format!("Successfully declined invitation {}", args.invitation_id));
            Ok(())
        }
    }
}

async fn run_members_command(
    client: &mut ApiClient,
    ctx: &RunContext,
    command: &OrgMembersCommand,
) -> Result<()> {
    match command {
        OrgMembersCommand::Add(args) => {
            let id = resolve_organization_id(client, selector(&args.target)?).await?;
            client
                .add_organization_member(&id, &args.user, &args.role)
                .await
                .map_err(|e| e.context("failed to add user to organization"))?;
            ctx.success(&format!(
                "Successfully added user {} to organization {} with role {}",
                args.user, id, args.role
            ));
        }
        OrgMembersCommand::Remove(args) => {
            let id = resolve_organization_id(client, selector(&args.target)?).await?;
            client
                .remove_organization_member(&id, &args.user)
                .await
                .map_err(|e| e.context("failed to remove user from organization"))?;
            ctx.success(&format!(
                "Successfully removed user {} from organization {}",
                args.user, id
            ));
        }
        OrgMembersCommand::SetRole(args) => {
            let id = resolve_organization_id(client, selector(&args.target)?).await?;
            client
                .change_organization_member_role(&id, &args.user, &args.role)
                .await
                .map_err(|e| e.context("failed to change member role"))?;
            ctx.success(&format!(
                "Successfully changed role of user {} in organization {} to {}",
                args.user, id, args.role
            ));
        }
    }
    Ok(())
}
