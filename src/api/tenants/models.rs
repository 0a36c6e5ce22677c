//! Tenant and catalogue data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::output::{renderable_item, Record, ToRecord};

/// Kubernetes tenant running in a project
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Tenant {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub host_cluster_id: String,
    pub name: String,
    #[serde(default)]
    pub cloud_provider: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub location_short: String,
    #[serde(default)]
    pub kubernetes_version: String,
    #[serde(default)]
    pub compute_quota: u32,
    #[serde(default)]
    pub memory_quota_gb: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl Tenant {
    /// Table row without the owning project
    pub fn summary(&self) -> Record {
        Record::new()
            .with("name", self.name.as_str())
            .with("cloud_provider", self.cloud_provider.as_str())
            .with("region", self.region.as_str())
            .with("kubernetes_version", self.kubernetes_version.as_str())
            .with("compute_quota", self.compute_quota)
            .with("memory_quota_gb", self.memory_quota_gb)
            .with("status", self.status.as_str())
    }
}

impl ToRecord for Tenant {
    fn curated_record(&self) -> Option<Record> {
        Some(self.summary())
    }
}

/// Provisioning state of a tenant
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TenantStatus {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub cloud_provider: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub kubernetes_version: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl ToRecord for TenantStatus {}

/// Where a tenant can be placed
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub cloud_provider: String,
    pub region: String,
    #[serde(default)]
    pub zone: String,
}

impl ToRecord for Location {
    fn curated_record(&self) -> Option<Record> {
        Some(
            Record::new()
                .with("cloud_provider", self.cloud_provider.as_str())
                .with("region", self.region.as_str())
                .with("zone", self.zone.as_str()),
        )
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct KubernetesVersion {
    pub version: String,
    #[serde(default)]
    pub is_default: bool,
}

impl ToRecord for KubernetesVersion {
    fn curated_record(&self) -> Option<Record> {
        Some(
            Record::new()
                .with("version", self.version.as_str())
                .with("is_default", self.is_default),
        )
    }
}

renderable_item!(Tenant, TenantStatus);

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateTenantRequest {
    pub name: String,
    pub cloud_provider: String,
    pub region: String,
    pub kubernetes_version: String,
    pub compute_quota: u32,
    pub memory_quota_gb: u32,
    pub namespace_suffix: String,
}

/// Partial tenant update; unset fields are sent as `null`
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct UpdateTenantRequest {
    pub kubernetes_version: Option<String>,
    pub compute_quota: Option<u32>,
    pub memory_quota_gb: Option<u32>,
}

impl UpdateTenantRequest {
    pub fn is_empty(&self) -> bool {
        self.kubernetes_version.is_none()
            && self.compute_quota.is_none()
            && self.memory_quota_gb.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tenant_record_uses_curated_columns() {
        let tenant: Tenant = serde_json::from_value(json!({
            "id": "t-1",
            "project_id": "p-1",
            "name": "dev",
            "cloud_provider": "eks",
            "region": "eu",
            "kubernetes_version": "1.30",
            "compute_quota": 2,
            "memory_quota_gb": 4,
            "status": "ready",
            "namespace": "dev-abc"
        }))
        .unwrap();
        let record = tenant.to_record().unwrap();
        assert_eq!(record.len(), 7);
        assert_eq!(record.headers()[0], "name");
        assert_eq!(record.cell("memory_quota_gb"), "4");
        assert!(record.get("namespace").is_none());
    }

    #[test]
    fn test_status_record_reflects_every_field() {
        let status: TenantStatus =
            serde_json::from_value(json!({"id": "t-1", "name": "dev", "status": "provisioning"}))
                .unwrap();
        let record = status.to_record().unwrap();
        assert_eq!(record.cell("status"), "provisioning");
        assert!(record.get("created_at").is_some());
    }

    #[test]
    fn test_update_request_serializes_nulls() {
        let req = UpdateTenantRequest {
            compute_quota: Some(8),
            ..Default::default()
        };
        assert!(!req.is_empty());
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"kubernetes_version": null, "compute_quota": 8, "memory_quota_gb": null})
        );
        assert!(UpdateTenantRequest::default().is_empty());
    }
}
