//! Project resolution utilities
//!
//! Names are matched exactly, inside one organization when it is known,
//! otherwise among the caller's own projects.

use log::debug;

use crate::api::{ApiClient, Selector};
use crate::error::{Result, SpaceError};

/// Resolve a project selector to its ID
pub async fn resolve_project_id(
    client: &mut ApiClient,
    selector: Selector<'_>,
    org_id: Option<&str>,
) -> Result<String> {
    let name = match selector {
        Selector::Id(id) => return Ok(id.to_string()),
        Selector::Name(name) => name,
    };

    let found = match org_id {
        Some(org_id) => {
            debug!("Resolving project '{}' in organization {}", name, org_id);
            client
                .list_organization_projects(org_id)
                .await
                .map_err(|e| e.context("failed to list projects in organization"))?
                .into_iter()
                .find(|p| p.name == name)
                .map(|p| p.id)
        }
        None => {
            debug!("Resolving project '{}' among your projects", name);
            client
                .list_my_projects()
                .await
                .map_err(|e| e.context("failed to list user projects"))?
                .into_iter()
                .find(|m| m.project.name == name)
                .map(|m| m.project.id)
        }
    };

    found.ok_or_else(|| match org_id {
        Some(_) => SpaceError::Config(format!("project '{}' not found in organization", name)),
        None => SpaceError::Config(format!("project '{}' not found", name)),
    })
}

/// First of the caller's projects, used when no project is given
pub async fn default_project_id(client: &mut ApiClient) -> Result<String> {
    client
        .list_my_projects()
        .await
        .map_err(|e| e.context("failed to list user projects"))?
        .into_iter()
        .next()
        .map(|m| m.project.id)
        .ok_or_else(|| SpaceError::Config("no projects found. Create a project first".to_string()))
}
