//! Organization data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::output::{renderable_item, Record, ToRecord};

/// Organization as returned by the API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl ToRecord for Organization {
    fn curated_record(&self) -> Option<Record> {
        Some(
            Record::new()
                .with("id", self.id.as_str())
                .with("name", self.name.as_str()),
        )
    }
}

/// The caller's membership in one organization
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OrganizationMembership {
    pub organization: Organization,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub is_default: bool,
}

impl ToRecord for OrganizationMembership {
    fn curated_record(&self) -> Option<Record> {
        Some(
            Record::new()
                .with("organization", self.organization.name.as_str())
                .with("role", self.role.as_str())
                .with("is_default", self.is_default),
        )
    }
}

/// Pending or past invitation to an organization
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Invitation {
    pub id: String,
    pub organization: Organization,
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

impl ToRecord for Invitation {}

renderable_item!(Organization, OrganizationMembership, Invitation);

#[derive(Serialize, Debug)]
pub struct CreateOrganizationRequest<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Serialize, Debug)]
pub struct UpdateOrganizationRequest<'a> {
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Renderable;
    use serde_json::json;

    fn membership() -> OrganizationMembership {
        serde_json::from_value(json!({
            "organization": {
                "id": "org-1",
                "name": "acme",
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-01T00:00:00Z"
            },
            "role": "admin",
            "is_default": true
        }))
        .unwrap()
    }

    #[test]
    fn test_membership_record_is_narrowed() {
        let record = membership().to_record().unwrap();
        assert_eq!(record.headers(), vec!["organization", "role", "is_default"]);
        assert_eq!(record.cell("organization"), "acme");
        assert_eq!(record.cell("is_default"), "true");
        assert!(record.get("id").is_none());
    }

    #[test]
    fn test_organization_record() {
        let records = membership().organization.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].headers(), vec!["id", "name"]);
    }

    #[test]
    fn test_create_request_omits_missing_description() {
        let req = CreateOrganizationRequest {
            name: "acme",
            description: None,
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"name": "acme"}));
    }

    #[test]
    fn test_invitation_without_timestamps() {
        let invitation: Invitation = serde_json::from_value(json!({
            "id": "inv-1",
            "organization": {"id": "org-1", "name": "acme"},
            "invitee_email": "new@example.com",
            "role": "member",
            "status": "pending"
        }))
        .unwrap();
        let record = invitation.to_record().unwrap();
        assert_eq!(
            record.headers(),
            vec![
                "created_at",
                "expires_at",
                "id",
                "invitee_email",
                "inviter_user_id",
                "organization",
                "role",
                "status"
            ]
        );
        assert!(record.cell("organization").contains("\"name\":\"acme\""));
        assert_eq!(record.cell("expires_at"), "1970-01-01T00:00:00Z");
    }
}
