//! Project command handlers

use log::debug;

use crate::api::organizations::resolve_organization_id;
use crate::api::{ApiClient, Selector};
use crate::cli::{
    OrgScope, ProjectCommand, ProjectListArgs, ProjectMembersCommand, ProjectTarget, QuotaArgs,
    RunContext,
};
use crate::error::Result;
use crate::output::Record;
use crate::ui::{confirm_deletion, finish_spinner};

use super::models::{CreateProjectRequest, ProjectChanges};
use super::resolver::resolve_project_id;

const TARGET_FLAGS: (&str, &str) = ("--project-name", "--project-id");

/// Role shown for projects listed through their organization
const ORG_PROJECT_ROLE: &str = "admin";

async fn target_id(client: &mut ApiClient, target: &ProjectTarget) -> Result<String> {
    let selector = Selector::pick(
        target.project_name.as_deref(),
        target.project_id.as_deref(),
        TARGET_FLAGS,
    )?;
    resolve_project_id(client, selector, None).await
}

/// Organization from `--org`/`--org-name`, or the default organization
async fn scoped_org_id(client: &mut ApiClient, scope: &OrgScope) -> Result<String> {
    let selector = Selector::optional(
        scope.org_name.as_deref(),
        scope.org.as_deref(),
        ("--org-name", "--org"),
    )?;
    match selector {
        Some(selector) => resolve_organization_id(client, selector).await,
        None => Ok(client
            .get_default_organization()
            .await
            .map_err(|e| e.context("failed to get default organization"))?
            .id),
    }
}

/// Number of tenants in a project; unreadable projects count as empty
async fn tenant_count(client: &mut ApiClient, project_id: &str) -> usize {
    match client.list_project_tenants(project_id).await {
        Ok(tenants) => tenants.len(),
        Err(e) => {
            debug!("Could not count tenants of project {}: {}", project_id, e);
            0
        }
    }
}

fn changes(
    name: Option<&String>,
    description: Option<&String>,
    quotas: &QuotaArgs,
) -> ProjectChanges {
    ProjectChanges {
        name: name.cloned(),
        description: description.cloned(),
        max_tenants: quotas.max_tenants,
        max_compute: quotas.max_compute,
        max_memory_gb: quotas.max_memory,
    }
}

/// Run a `project` subcommand
pub async fn run_project_command(
    client: &mut ApiClient,
    ctx: &RunContext,
    command: &ProjectCommand,
) -> Result<()> {
    match command {
        ProjectCommand::List(args) => {
            let spinner = ctx.spinner("Fetching projects...");
            let result = list_projects(client, args).await;
            finish_spinner(spinner);
            ctx.formatter.print(&result?)
        }
        ProjectCommand::Create(args) => {
            let org_id = scoped_org_id(client, &args.scope).await?;
            let request = CreateProjectRequest {
                name: args.name.clone(),
                description: args.description.clone().filter(|d| !d.is_empty()),
                max_tenants: args.max_tenants,
                max_compute: args.max_compute,
                max_memory_gb: args.max_memory,
            };
            let project = client
                .create_project(&org_id, &request)
                .await
                .map_err(|e| e.context("failed to create project"))?;
            ctx.formatter.print(&project)
        }
        ProjectCommand::Get(target) => {
            let id = target_id(client, target).await?;
            let project = client
                .get_project(&id)
                .await
                .map_err(|e| e.context("failed to get project"))?;
            ctx.formatter.print(&project)
        }
        ProjectCommand::Update(args) => {
            let id = target_id(client, &args.target).await?;
            let current = client
                .get_project(&id)
                .await
                .map_err(|e| e.context("failed to get current project"))?;
            let request = changes(args.name.as_ref(), args.description.as_ref(), &args.quotas)
                .apply(&current);
            let project = client
                .update_project(&id, &request)
                .await
                .map_err(|e| e.context("failed to update project"))?;
            ctx.formatter.print(&project)
        }
        ProjectCommand::Quotas(args) => {
            let id = target_id(client, &args.target).await?;
            let current = client
                .get_project(&id)
                .await
                .map_err(|e| e.context("failed to get current project"))?;
            let request = changes(None, None, &args.quotas).apply_quotas(&current);
            let project = client
                .update_project_quotas(&id, &request)
                .await
                .map_err(|e| e.context("failed to update project quotas"))?;
            ctx.formatter.print(&project)
        }
        ProjectCommand::Delete(args) => {
            let prompt = format!(
                "Are you sure you want to delete project '{}'? This action cannot be undone.",
                args.id
            );
            if !confirm_deletion(&prompt, args.force)? {
                ctx.success("Deletion cancelled.");
                return Ok(());
            }
            client
                .delete_project(&args.id)
                .await
                .map_err(|e| e.context("failed to delete project"))?;
            ctx.success(&format!("Successfully deleted project {}", args.id));
            Ok(())
        }
        ProjectCommand::Members { command } => run_members_command(client, ctx, command).await,
        ProjectCommand::Invite(args) => {
            let id = target_id(client, &args.target).await?;
            client
                .send_project_invitation(&id, &args.email, &args.role)
                .await
                .map_err(|e| e.context("failed to send project invitation"))?;
            ctx.success(&format!(
                "Successfully invited {} to project {} with role {}",
                args.email, id, args.role
            ));
            Ok(())
        }
        ProjectCommand::Invitations(target) => {
            let selector = Selector::optional(
                target.project_name.as_deref(),
                target.project_id.as_deref(),
                TARGET_FLAGS,
            )?;
            let invitations = match selector {
                Some(selector) => {
                    let id = resolve_project_id(client, selector, None).await?;
                    client.list_project_invitations(&id).await
                }
                None => client.list_my_project_invitations().await,
            }
            .map_err(|e| e.context("failed to list project invitations"))?;
            ctx.formatter.print(&invitations)
        }
        ProjectCommand::Accept(args) => {
            client
                .accept_project_invitation(&args.invitation_id)
                .await
                .map_err(|e| e.context("failed to accept project invitation"))?;
            ctx.success(&format!("Successfully accepted invitation {}", args.invitation_id));
            Ok(())
        }
        ProjectCommand::Decline(args) => {
            client
                .decline_project_invitation(&args.invitation_id)
                .await
                .map_err(|e| e.context("failed to decline project invitation"))?;
            ctx.success(&format!("Successfully declined invitation {}", args.invitation_id));
            Ok(())
        }
    }
}

/// Rows for `project list`: one organization, or every organization with `--all`
async fn list_projects(client: &mut ApiClient, args: &ProjectListArgs) -> Result<Vec<Record>> {
    let mut rows = Vec::new();

    if args.all {
        let memberships = client
            .list_organizations()
            .await
            .map_err(|e| e.context("failed to list user organizations"))?;
        for membership in memberships {
            let projects = match client
                .list_organization_projects(&membership.organization.id)
                .await
            {
                Ok(projects) => projects,
                Err(e) if e.requires_login() => return Err(e),
                Err(e) => {
                    debug!(
                        "Skipping organization {}: {}",
                        membership.organization.name, e
                    );
                    continue;
                }
            };
            for project in projects {
                let count = tenant_count(client, &project.id).await;
                rows.push(
                    Record::new()
                        .with("organization", membership.organization.name.as_str())
                        .with("name", project.name)
                        .with("role", membership.role.as_str())
                        .with("tenant_count", count),
                );
            }
        }
        return Ok(rows);
    }

    let org_id = scoped_org_id(client, &args.scope).await?;
    let projects = client
        .list_organization_projects(&org_id)
        .await
        .map_err(|e| e.context("failed to list organization projects"))?;
    for project in projects {
        let count = tenant_count(client, &project.id).await;
        rows.push(
            Record::new()
                .with("name", project.name)
                .with("role", ORG_PROJECT_ROLE)
                .with("tenant_count", count),
        );
    }
    Ok(rows)
}

async fn run_members_command(
    client: &mut ApiClient,
    ctx: &RunContext,
    command: &ProjectMembersCommand,
) -> Result<()> {
    match command {
        ProjectMembersCommand::List(target) => {
            let id = target_id(client, target).await?;
            let members = client
                .list_project_members(&id)
                .await
                .map_err(|e| e.context("failed to list project members"))?;
            ctx.formatter.print(&members)?;
        }
        ProjectMembersCommand::Add(args) => {
            let id = target_id(client, &args.target).await?;
            client
                .add_project_member(&id, &args.user, &args.role)
                .await
                .map_err(|e| e.context("failed to add user to project"))?;
            ctx.success(&format!(
                "Successfully added user {} to project {} with role {}",
                args.user, id, args.role
            ));
        }
        ProjectMembersCommand::Remove(args) => {
            client
                .remove_project_member(&args.project_id, &args.user_id)
                .await
                .map_err(|e| e.context("failed to remove user from project"))?;
            ctx.success(&format!(
                "Successfully removed user {} from project {}",
                args.user_id, args.project_id
            ));
        }
        ProjectMembersCommand::SetRole(args) => {
            let id = target_id(client, &args.target).await?;
            client
                .change_project_member_role(&id, &args.user, &args.role)
                .await
                .map_err(|e| e.context("failed to change member role"))?;
            ctx.success(&format!(
                "Successfully changed role of user {} in project {} to {}",
                args.user, id, args.role
            ));
        }
    }
    Ok(())
}
