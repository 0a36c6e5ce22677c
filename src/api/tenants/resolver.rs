//! Tenant resolution utilities
//!
//! Tenant names are only unique inside a project, so resolving by name
//! needs the project as well.

use log::debug;

use crate::api::projects::resolve_project_id;
use crate::api::{ApiClient, Selector};
use crate::cli::{ProjectScope, TenantTarget};
use crate::error::{Result, SpaceError};

/// Project from `--project`/`--project-name`, if either was given
pub async fn scoped_project_id(
    client: &mut ApiClient,
    scope: &ProjectScope,
) -> Result<Option<String>> {
    let selector = Selector::optional(
        scope.project_name.as_deref(),
        scope.project.as_deref(),
        ("--project-name", "--project"),
    )?;
    match selector {
        Some(selector) => resolve_project_id(client, selector, None).await.map(Some),
        None => Ok(None),
    }
}

/// Resolve a tenant selector to its ID
pub async fn resolve_tenant_id(
    client: &mut ApiClient,
    selector: Selector<'_>,
    project_id: Option<&str>,
) -> Result<String> {
    let name = match selector {
        Selector::Id(id) => return Ok(id.to_string()),
        Selector::Name(name) => name,
    };
    let project_id = project_id.ok_or_else(|| {
        SpaceError::Config("--project or --project-name is required when using --name".to_string())
    })?;

    debug!("Resolving tenant '{}' in project {}", name, project_id);
    client
        .list_project_tenants(project_id)
        .await
        .map_err(|e| e.context("failed to list tenants in project"))?
        .into_iter()
        .find(|t| t.name == name)
        .map(|t| t.id)
        .ok_or_else(|| SpaceError::Config(format!("tenant '{}' not found in project", name)))
}

/// Tenant ID for `--id`/`--name` plus the optional project scope
pub async fn resolve_target(client: &mut ApiClient, target: &TenantTarget) -> Result<String> {
    let selector = Selector::pick(
        target.name.as_deref(),
        target.id.as_deref(),
        ("--name", "--id"),
    )?;
    if let Selector::Id(id) = selector {
        return Ok(id.to_string());
    }
    let project_id = scoped_project_id(client, &target.scope).await?;
    resolve_tenant_id(client, selector, project_id.as_deref()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_tenants(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/v1/projects/p-1/tenants"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "t-1", "name": "dev"},
                {"id": "t-2", "name": "prod"}
            ])))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_id_passes_through_without_requests() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client =
            ApiClient::for_tests(&mock_server.uri(), "a", "r", &dir.path().join("cfg"));

        let target = TenantTarget {
            id: Some("t-9".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_target(&mut client, &target).await.unwrap(), "t-9");
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_name_resolved_inside_project() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client =
            ApiClient::for_tests(&mock_server.uri(), "a", "r", &dir.path().join("cfg"));
        mount_tenants(&mock_server).await;

        let target = TenantTarget {
            name: Some("prod".to_string()),
            scope: ProjectScope {
                project: Some("p-1".to_string()),
                project_name: None,
            },
            ..Default::default()
        };
        assert_eq!(resolve_target(&mut client, &target).await.unwrap(), "t-2");
    }

    #[tokio::test]
    async fn test_name_resolved_through_project_name() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client =
            ApiClient::for_tests(&mock_server.uri(), "a", "r", &dir.path().join("cfg"));
        mount_tenants(&mock_server).await;
        Mock::given(method("GET"))
            .and(path("/api/v1/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"project": {"id": "p-1", "name": "web"}, "role": "admin"}
            ])))
            .mount(&mock_server)
            .await;

        let target = TenantTarget {
            name: Some("dev".to_string()),
            scope: ProjectScope {
                project: None,
                project_name: Some("web".to_string()),
            },
            ..Default::default()
        };
        assert_eq!(resolve_target(&mut client, &target).await.unwrap(), "t-1");
    }

    #[tokio::test]
    async fn test_name_without_project_is_rejected() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client =
            ApiClient::for_tests(&mock_server.uri(), "a", "r", &dir.path().join("cfg"));

        let err = resolve_tenant_id(&mut client, Selector::Name("dev"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, SpaceError::Config(_)));
        assert!(err.to_string().contains("--project or --project-name is required"));
    }

    #[tokio::test]
    async fn test_unknown_tenant_name() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client =
            ApiClient::for_tests(&mock_server.uri(), "a", "r", &dir.path().join("cfg"));
        mount_tenants(&mock_server).await;

        let err = resolve_tenant_id(&mut client, Selector::Name("staging"), Some("p-1"))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: tenant 'staging' not found in project"
        );
    }

    #[tokio::test]
    async fn test_both_id_and_name_rejected() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client =
            ApiClient::for_tests(&mock_server.uri(), "a", "r", &dir.path().join("cfg"));

        let target = TenantTarget {
            id: Some("t-1".to_string()),
            name: Some("dev".to_string()),
            ..Default::default()
        };
        let err = resolve_target(&mut client, &target).await.unwrap_err();
        assert!(err.to_string().contains("exactly one of --name or --id is required"));
    }
}
