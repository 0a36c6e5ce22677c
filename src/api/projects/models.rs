//! Project data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::output::{renderable_item, Record, ToRecord};

/// Project inside an organization, with its tenant quotas
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub organization_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub max_tenants: i32,
    #[serde(default)]
    pub max_compute: i32,
    #[serde(default)]
    pub max_memory_gb: i32,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl ToRecord for Project {
    fn curated_record(&self) -> Option<Record> {
        Some(
            Record::new()
                .with("id", self.id.as_str())
                .with("name", self.name.as_str())
                .with("organization_id", self.organization_id.as_str()),
        )
    }
}

/// The caller's membership in one project
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ProjectMembership {
    pub project: Project,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl ToRecord for ProjectMembership {
    fn curated_record(&self) -> Option<Record> {
        Some(
            Record::new()
                .with("project", self.project.name.as_str())
                .with("role", self.role.as_str()),
        )
    }
}

/// A user's role in a project
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ProjectMember {
    pub user_id: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl ToRecord for ProjectMember {}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ProjectInvitation {
    pub id: String,
    pub project: Project,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub inviter_user_id: String,
    #[serde(default)]
    pub invitee_email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl ToRecord for ProjectInvitation {}

renderable_item!(Project, ProjectMembership, ProjectMember, ProjectInvitation);

/// Body for project creation; `description` is sent as `null` when absent
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: Option<String>,
    pub max_tenants: i32,
    pub max_compute: i32,
    pub max_memory_gb: i32,
}

/// Full replacement of a project's editable fields
pub type UpdateProjectRequest = CreateProjectRequest;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UpdateProjectQuotasRequest {
    pub max_tenants: i32,
    pub max_compute: i32,
    pub max_memory_gb: i32,
}

/// Values the user asked to change; `None` keeps the current one
#[derive(Debug, Default, Clone)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub max_tenants: Option<i32>,
    pub max_compute: Option<i32>,
    pub max_memory_gb: Option<i32>,
}

impl ProjectChanges {
    /// Merge onto `current`. Empty strings count as not given.
    pub fn apply(&self, current: &Project) -> UpdateProjectRequest {
        let given = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
        UpdateProjectRequest {
            name: given(&self.name).unwrap_or_else(|| current.name.clone()),
            description: given(&self.description).or_else(|| current.description.clone()),
            max_tenants: self.max_tenants.unwrap_or(current.max_tenants),
            max_compute: self.max_compute.unwrap_or(current.max_compute),
            max_memory_gb: self.max_memory_gb.unwrap_or(current.max_memory_gb),
        }
    }

    pub fn apply_quotas(&self, current: &Project) -> UpdateProjectQuotasRequest {
        UpdateProjectQuotasRequest {
            max_tenants: self.max_tenants.unwrap_or(current.max_tenants),
            max_compute: self.max_compute.unwrap_or(current.max_compute),
            max_memory_gb: self.max_memory_gb.unwrap_or(current.max_memory_gb),
        }
    }
}
