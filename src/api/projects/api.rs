//! Project API operations

use crate::api::models::{AddMemberRequest, ChangeRoleRequest, InvitationRequest};
use crate::api::ApiClient;
use crate::error::Result;

use super::models::{
    CreateProjectRequest, Project, ProjectInvitation, ProjectMember, ProjectMembership,
    UpdateProjectQuotasRequest, UpdateProjectRequest,
};

impl ApiClient {
    /// Projects of one organization
    pub async fn list_organization_projects(&mut self, org_id: &str) -> Result<Vec<Project>> {
        self.get(&format!("/api/v1/organizations/{}/projects", org_id))
            .await?
            .json()
    }

    /// Projects the current user is a member of, across organizations
    pub async fn list_my_projects(&mut self) -> Result<Vec<ProjectMembership>> {
        self.get("/api/v1/projects").await?.json()
    }

    pub async fn get_project(&mut self, id: &str) -> Result<Project> {
        self.get(&format!("/api/v1/projects/{}", id)).await?.json()
    }

    pub async fn create_project(
        &mut self,
        org_id: &str,
        request: &CreateProjectRequest,
    ) -> Result<Project> {
        self.post(&format!("/api/v1/organizations/{}/projects", org_id), request)
            .await?
            .json()
    }

    pub async fn update_project(
        &mut self,
        id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<Project> {
        self.put(&format!("/api/v1/projects/{}", id), request)
            .await?
            .json()
    }

    pub async fn update_project_quotas(
        &mut self,
        id: &str,
        request: &UpdateProjectQuotasRequest,
    ) -> Result<Project> {
        self.patch(&format!("/api/v1/projects/{}/quotas", id), request)
            .await?
            .json()
    }

    pub async fn delete_project(&mut self, id: &str) -> Result<()> {
        self.delete(&format!("/api/v1/projects/{}", id))
            .await?
            .success()
    }

    pub async fn list_project_members(&mut self, project_id: &str) -> Result<Vec<ProjectMember>> {
        self.get(&format!("/api/v1/projects/{}/users", project_id))
            .await?
            .json()
    }

    pub async fn add_project_member(
        &mut self,
        project_id: &str,
        user_id: &str,
        role: &str,
    ) -> Result<()> {
        self.post(
            &format!("/api/v1/projects/{}/users", project_id),
            &AddMemberRequest { user_id, role },
        )
        .await?
        .success()
    }

    pub async fn remove_project_member(&mut self, project_id: &str, user_id: &str) -> Result<()> {
        self.delete(&format!("/api/v1/projects/{}/users/{}", project_id, user_id))
            .await?
            .success()
    }

    pub async fn change_project_member_role(
        &mut self,
        project_id: &str,
        user_id: &str,
        role: &str,
    ) -> Result<()> {
        self.patch(
            &format!("/api/v1/projects/{}/users/{}/role", project_id, user_id),
            &ChangeRoleRequest { role },
        )
        .await?
        .success()
    }

    pub async fn send_project_invitation(
        &mut self,
        project_id: &str,
        email: &str,
        role: &str,
    ) -> Result<()> {
        self.post(
            &format!("/api/v1/projects/{}/invitations", project_id),
            &InvitationRequest { email, role },
        )
        .await?
        .success()
    }

    pub async fn list_project_invitations(
        &mut self,
        project_id: &str,
    ) -> Result<Vec<ProjectInvitation>> {
        self.get(&format!("/api/v1/projects/{}/invitations", project_id))
            .await?
            .json()
    }

    /// Project invitations addressed to the current user
    pub async fn list_my_project_invitations(&mut self) -> Result<Vec<ProjectInvitation>> {
        self.get("/api/v1/projects/invitations").await?.json()
    }

    pub async fn accept_project_invitation(&mut self, invitation_id: &str) -> Result<()> {
        self.post_empty(&format!(
            "/api/v1/projects/invitations/{}/accept",
            invitation_id
        ))
        .await?
        .success()
    }

    pub async fn decline_project_invitation(&mut self, invitation_id: &str) -> Result<()> {
        self.post_empty(&format!(
            "/api/v1/projects/invitations/{}/decline",
            invitation_id
        ))
        .await?
        .success()
    }
}
