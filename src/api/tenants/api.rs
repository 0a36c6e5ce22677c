//! Tenant API operations

use log::debug;

use crate::api::ApiClient;
use crate::error::Result;

use super::models::{
    CreateTenantRequest, KubernetesVersion, Location, Tenant, TenantStatus, UpdateTenantRequest,
};

impl ApiClient {
    pub async fn list_project_tenants(&mut self, project_id: &str) -> Result<Vec<Tenant>> {
        self.get(&format!("/api/v1/projects/{}/tenants", project_id))
            .await?
            .json()
    }

    pub async fn get_tenant(&mut self, id: &str) -> Result<Tenant> {
        self.get(&format!("/api/v1/tenants/{}", id)).await?.json()
    }

    pub async fn create_tenant(
        &mut self,
        project_id: &str,
        request: &CreateTenantRequest,
    ) -> Result<Tenant> {
        self.post(&format!("/api/v1/projects/{}/tenants", project_id), request)
            .await?
            .json()
    }

    pub async fn update_tenant(
        &mut self,
        id: &str,
        request: &UpdateTenantRequest,
    ) -> Result<Tenant> {
        self.patch(&format!("/api/v1/tenants/{}", id), request)
            .await?
            .json()
    }

    pub async fn delete_tenant(&mut self, id: &str) -> Result<()> {
        self.delete(&format!("/api/v1/tenants/{}", id))
            .await?
            .success()
    }

    pub async fn get_tenant_status(&mut self, id: &str) -> Result<TenantStatus> {
        self.get(&format!("/api/v1/tenants/{}/status", id))
            .await?
            .json()
    }

    /// Kubeconfig document for a tenant, returned verbatim
    pub async fn get_tenant_kubeconfig(&mut self, id: &str) -> Result<String> {
        debug!("Fetching kubeconfig for tenant {}", id);
        self.get(&format!("/api/v1/tenants/{}/kubeconfig", id))
            .await?
            .text()
    }

    pub async fn list_locations(&mut self) -> Result<Vec<Location>> {
        self.get("/api/v1/tenants/locations").await?.json()
    }

    pub async fn list_clouds(&mut self) -> Result<Vec<String>> {
        self.get("/api/v1/tenants/clouds").await?.json()
    }

    pub async fn list_regions(&mut self, cloud_provider: &str) -> Result<Vec<String>> {
        self.get(&format!(
            "/api/v1/tenants/regions?cloud_provider={}",
            urlencoding::encode(cloud_provider)
        ))
        .await?
        .json()
    }

    pub async fn list_zones(&mut self, cloud_provider: &str, region: &str) -> Result<Vec<String>> {
        self.get(&format!(
            "/api/v1/tenants/zones?cloud_provider={}&region={}",
            urlencoding::encode(cloud_provider),
            urlencoding::encode(region)
        ))
        .await?
        .json()
    }

    pub async fn list_kubernetes_versions(&mut self) -> Result<Vec<KubernetesVersion>> {
        self.get("/api/v1/tenants/kubernetes-versions").await?.json()
    }
}
