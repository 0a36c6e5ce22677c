//! Project module

mod api;
mod commands;
mod models;
mod resolver;

pub use commands::run_project_command;
pub use models::{
    CreateProjectRequest, Project, ProjectChanges, ProjectInvitation, ProjectMember,
    ProjectMembership, UpdateProjectQuotasRequest, UpdateProjectRequest,
};
pub use resolver::{default_project_id, resolve_project_id};
