//! Organization API operations

use log::debug;

use crate::api::models::{AddMemberRequest, ChangeRoleRequest, InvitationRequest};
use crate::api::ApiClient;
use crate::error::Result;

use super::models::{
    CreateOrganizationRequest, Invitation, Organization, OrganizationMembership,
    UpdateOrganizationRequest,
};

impl ApiClient {
    /// Organizations the current user belongs to
    pub async fn list_organizations(&mut self) -> Result<Vec<OrganizationMembership>> {
        self.get("/api/v1/organizations").await?.json()
    }

    pub async fn get_default_organization(&mut self) -> Result<Organization> {
        self.get("/api/v1/organizations/default").await?.json()
    }

    /// Look up an organization by its exact name
    pub async fn get_organization_by_name(&mut self, name: &str) -> Result<Organization> {
        debug!("Resolving organization by name: {}", name);
        let path = format!(
            "/api/v1/organizations/by-name/{}",
            urlencoding::encode(name)
        );
        self.get(&path).await?.json()
    }

    pub async fn get_organization(&mut self, id: &str) -> Result<Organization> {
        self.get(&format!("/api/v1/organizations/{}", id))
            .await?
            .json()
    }

    pub async fn create_organization(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Organization> {
        self.post(
            "/api/v1/organizations",
            &CreateOrganizationRequest { name, description },
        )
        .await?
        .json()
    }

    /// Rename an organization
    pub async fn update_organization(&mut self, id: &str, name: &str) -> Result<Organization> {
        self.put(
            &format!("/api/v1/organizations/{}", id),
            &UpdateOrganizationRequest { name },
        )
        .await?
        .json()
    }

    pub async fn delete_organization(&mut self, id: &str) -> Result<()> {
        self.delete(&format!("/api/v1/organizations/{}", id))
            .await?
            .success()
    }

    /// Make `id` the organization used when none is given
    pub async fn set_default_organization(&mut self, id: &str) -> Result<()> {
        self.put_empty(&format!("/api/v1/organizations/{}/default", id))
            .await?
            .success()
    }

    pub async fn add_organization_member(
        &mut self,
        org_id: &str,
        user_id: &str,
        role: &str,
    ) -> Result<()> {
        self.post(
            &format!("/api/v1/organizations/{}/users", org_id),
            &AddMemberRequest { user_id, role },
        )
        .await?
        .success()
    }

    pub async fn remove_organization_member(&mut self, org_id: &str, user_id: &str) -> Result<()> {
        self.delete(&format!("/api/v1/organizations/{}/users/{}", org_id, user_id))
            .await?
            .success()
    }

    pub async fn change_organization_member_role(
        &mut self,
        org_id: &str,
        user_id: &str,
        role: &str,
    ) -> Result<()> {
        self.patch(
            &format!("/api/v1/organizations/{}/users/{}/role", org_id, user_id),
            &ChangeRoleRequest { role },
        )
        .await?
        .success()
    }

    pub async fn send_organization_invitation(
        &mut self,
        org_id: &str,
        email: &str,
        role: &str,
    ) -> Result<()> {
        self.post(
            &format!("/api/v1/organizations/{}/invitations", org_id),
            &InvitationRequest { email, role },
        )
        .await?
        .success()
    }

    /// Invitations sent from an organization
    pub async fn list_organization_invitations(&mut self, org_id: &str) -> Result<Vec<Invitation>> {
        self.get(&format!("/api/v1/organizations/{}/invitations", org_id))
            .await?
            .json()
    }

    /// Invitations addressed to the current user
    pub async fn list_my_organization_invitations(&mut self) -> Result<Vec<Invitation>> {
        self.get("/api/v1/organizations/invitations").await?.json()
    }

    pub async fn accept_organization_invitation(&mut self, invitation_id: &str) -> Result<()> {
        self.post_empty(&format!(
            "/api/v1/organizations/invitations/{}/accept",
            invitation_id
        ))
        .await?
        .success()
    }

    pub async fn decline_organization_invitation(&mut self, invitation_id: &str) -> Result<()> {
        self.post_empty(&format!(
            "/api/v1/organizations/invitations/{}/decline",
            invitation_id
        ))
        .await?
        .success()
    }
}
