//! Organization resolution by name or ID

use log::debug;

use crate::api::{ApiClient, Selector};
use crate::error::Result;

/// Turn a selector into an organization ID.
///
/// IDs are taken as given; names go through the by-name lookup.
pub async fn resolve_organization_id(
    client: &mut ApiClient,
    selector: Selector<'_>,
) -> Result<String> {
    match selector {
        Selector::Id(id) => Ok(id.to_string()),
        Selector::Name(name) => {
            let org = client
                .get_organization_by_name(name)
                .await
                .map_err(|e| e.context("failed to resolve organization by name"))?;
            debug!("Organization '{}' resolved to {}", name, org.id);
            Ok(org.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_id_is_used_without_request() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client =
            ApiClient::for_tests(&mock_server.uri(), "a", "r", &dir.path().join("cfg"));

        let id = resolve_organization_id(&mut client, Selector::Id("org-7"))
            .await
            .unwrap();
        assert_eq!(id, "org-7");
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_name_is_looked_up() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client =
            ApiClient::for_tests(&mock_server.uri(), "a", "r", &dir.path().join("cfg"));

        Mock::given(method("GET"))
            .and(path("/api/v1/organizations/by-name/acme"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": "org-1", "name": "acme"})),
            )
            .mount(&mock_server)
            .await;

        let id = resolve_organization_id(&mut client, Selector::Name("acme"))
            .await
            .unwrap();
        assert_eq!(id, "org-1");
    }

    #[tokio::test]
    async fn test_unknown_name_keeps_api_error() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client =
            ApiClient::for_tests(&mock_server.uri(), "a", "r", &dir.path().join("cfg"));

        Mock::given(method("GET"))
            .and(path("/api/v1/organizations/by-name/ghost"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
            .mount(&mock_server)
            .await;

        let err = resolve_organization_id(&mut client, Selector::Name("ghost"))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to resolve organization by name: API error (404): not found"
        );
    }
}
