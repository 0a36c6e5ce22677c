//! Tenant command handlers

use std::process::{ExitCode, Stdio};

use log::debug;

use crate::api::projects::default_project_id;
use crate::api::ApiClient;
use crate::cli::{RunContext, TenantCommand, TenantCreateArgs, TenantKubectlArgs, TenantUpdateArgs};
use crate::config::credentials as fallback;
use crate::credentials::Credentials;
use crate::error::{Result, SpaceError};
use crate::output::Record;
use crate::ui::{confirm_deletion, finish_spinner};

use super::kubeconfig::{write_private, KubeconfigCache};
use super::models::{CreateTenantRequest, UpdateTenantRequest};
use super::resolver::{resolve_target, scoped_project_id};

/// Run a `tenant` subcommand; the exit code is only non-zero when kubectl fails
pub async fn run_tenant_command(
    client: &mut ApiClient,
    ctx: &RunContext,
    command: &TenantCommand,
) -> Result<ExitCode> {
    match command {
        TenantCommand::List(args) => {
            if args.all {
                let spinner = ctx.spinner("Fetching tenants...");
                let result = list_all_tenants(client).await;
                finish_spinner(spinner);
                ctx.formatter.print(&result?)?;
            } else {
                let project_id = match scoped_project_id(client, &args.scope).await? {
                    Some(id) => id,
                    None => default_project_id(client).await?,
                };
                let tenants = client
                    .list_project_tenants(&project_id)
                    .await
                    .map_err(|e| e.context("failed to list tenants"))?;
                ctx.formatter.print(&tenants)?;
            }
        }
        TenantCommand::Create(args) => {
            let project_id = match scoped_project_id(client, &args.scope).await? {
                Some(id) => id,
                None => default_project_id(client).await?,
            };
            let request = create_request(args, client.credentials());
            debug!(
                "Creating tenant {} in project {} ({}/{})",
                request.name, project_id, request.cloud_provider, request.region
            );
            let tenant = client
                .create_tenant(&project_id, &request)
                .await
                .map_err(|e| e.context("failed to create tenant"))?;
            ctx.formatter.print(&tenant)?;
        }
        TenantCommand::Get(target) => {
            let id = resolve_target(client, target).await?;
            let tenant = client
                .get_tenant(&id)
                .await
                .map_err(|e| e.context("failed to get tenant"))?;
            ctx.formatter.print(&tenant)?;
        }
        TenantCommand::Status(target) => {
            let id = resolve_target(client, target).await?;
            let status = client
                .get_tenant_status(&id)
                .await
                .map_err(|e| e.context("failed to get tenant status"))?;
            ctx.formatter.print(&status)?;
        }
        TenantCommand::Update(args) => {
            let request = update_request(args)?;
            let id = resolve_target(client, &args.target).await?;
            let tenant = client
                .update_tenant(&id, &request)
                .await
                .map_err(|e| e.context("failed to update tenant"))?;
            ctx.formatter.print(&tenant)?;
        }
        TenantCommand::Delete(args) => {
            let id = resolve_target(client, &args.target).await?;
            let tenant = client
                .get_tenant(&id)
                .await
                .map_err(|e| e.context("failed to get tenant"))?;
            let prompt = format!(
                "Are you sure you want to delete tenant '{}' (ID: {})? This action cannot be undone.",
                tenant.name, tenant.id
            );
            if !confirm_deletion(&prompt, args.force)? {
                ctx.success("Deletion cancelled.");
                return Ok(ExitCode::SUCCESS);
            }
            client
                .delete_tenant(&id)
                .await
                .map_err(|e| e.context("failed to delete tenant"))?;
            ctx.success(&format!("Successfully deleted tenant {}", tenant.name));
        }
        TenantCommand::Kubeconfig(args) => {
            let kubeconfig = client
                .get_tenant_kubeconfig(&args.id)
                .await
                .map_err(|e| e.context("failed to get kubeconfig"))?;
            match &args.output_file {
                Some(path) => {
                    write_private(path, &kubeconfig)
                        .map_err(|e| e.context("failed to write kubeconfig"))?;
                    ctx.success(&format!("Kubeconfig saved to {}", path.display()));
                }
                None => print!("{}", kubeconfig),
            }
        }
        TenantCommand::Kubectl(args) => return run_kubectl(client, args).await,
        TenantCommand::Locations => {
            let locations = client
                .list_locations()
                .await
                .map_err(|e| e.context("failed to list locations"))?;
            ctx.formatter.print(&locations)?;
        }
        TenantCommand::Clouds => {
            let clouds = client
                .list_clouds()
                .await
                .map_err(|e| e.context("failed to list cloud providers"))?;
            ctx.formatter.print(&single_column("cloud_provider", clouds))?;
        }
        TenantCommand::Regions(args) => {
            let regions = client
                .list_regions(&args.cloud)
                .await
                .map_err(|e| e.context("failed to list regions"))?;
            ctx.formatter.print(&single_column("region", regions))?;
        }
        TenantCommand::Zones(args) => {
            let zones = client
                .list_zones(&args.cloud, &args.region)
                .await
                .map_err(|e| e.context("failed to list zones"))?;
            ctx.formatter.print(&single_column("zone", zones))?;
        }
        TenantCommand::K8sVersions => {
            let versions = client
                .list_kubernetes_versions()
                .await
                .map_err(|e| e.context("failed to list Kubernetes versions"))?;
            ctx.formatter.print(&versions)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Tenants of every project the caller belongs to, prefixed with the project name
async fn list_all_tenants(client: &mut ApiClient) -> Result<Vec<Record>> {
    let memberships = client
        .list_my_projects()
        .await
        .map_err(|e| e.context("failed to list user projects"))?;
    if memberships.is_empty() {
        return Err(SpaceError::Config(
            "no projects found. Create a project first".to_string(),
        ));
    }

    let mut rows = Vec::new();
    for membership in memberships {
        let tenants = client
            .list_project_tenants(&membership.project.id)
            .await
            .map_err(|e| {
                e.context(format!(
                    "failed to list tenants for project {}",
                    membership.project.name
                ))
            })?;
        rows.extend(tenants.iter().map(|tenant| {
            tenant
                .summary()
                .with("project", membership.project.name.as_str())
        }));
    }
    Ok(rows)
}

/// Flag, then the configured default, then the built-in default
fn create_request(args: &TenantCreateArgs, defaults: &Credentials) -> CreateTenantRequest {
    let text = |flag: &Option<String>, configured: &str, builtin: &str| {
        flag.clone()
            .filter(|v| !v.is_empty())
            .or_else(|| Some(configured.to_string()).filter(|v| !v.is_empty()))
            .unwrap_or_else(|| builtin.to_string())
    };
    let quota = |flag: Option<u32>, configured: u32, builtin: u32| {
        flag.filter(|v| *v > 0)
            .or(Some(configured).filter(|v| *v > 0))
            .unwrap_or(builtin)
    };

    CreateTenantRequest {
        name: args.name.clone(),
        cloud_provider: text(&args.cloud, &defaults.default_cloud, fallback::DEFAULT_CLOUD),
        region: text(&args.region, &defaults.default_region, fallback::DEFAULT_REGION),
        kubernetes_version: args.k8s_version.clone().unwrap_or_default(),
        compute_quota: quota(args.compute, defaults.default_compute, fallback::DEFAULT_COMPUTE),
        memory_quota_gb: quota(args.memory, defaults.default_memory, fallback::DEFAULT_MEMORY),
        namespace_suffix: args.namespace_suffix.clone(),
    }
}

fn update_request(args: &TenantUpdateArgs) -> Result<UpdateTenantRequest> {
    let request = UpdateTenantRequest {
        kubernetes_version: args.k8s_version.clone().filter(|v| !v.is_empty()),
        compute_quota: args.compute,
        memory_quota_gb: args.memory,
    };
    if request.is_empty() {
        return Err(SpaceError::Config(
            "nothing to update. Pass --k8s-version, --compute or --memory".to_string(),
        ));
    }
    Ok(request)
}

fn single_column(key: &str, values: Vec<String>) -> Vec<Record> {
    values
        .into_iter()
        .map(|value| Record::new().with(key, value))
        .collect()
}

async fn run_kubectl(client: &mut ApiClient, args: &TenantKubectlArgs) -> Result<ExitCode> {
    if args.args.is_empty() {
        return Err(SpaceError::Config(
            "no kubectl command provided. Usage: spacectl tenant kubectl [flags] -- <kubectl-command>"
                .to_string(),
        ));
    }

    let tenant_id = resolve_target(client, &args.target).await?;
    let kubeconfig = KubeconfigCache::in_temp_dir()
        .get_or_fetch(client, &tenant_id, args.no_cache)
        .await
        .map_err(|e| e.context("failed to get kubeconfig"))?;

    debug!("Running kubectl {:?} with KUBECONFIG={}", args.args, kubeconfig.display());
    let status = tokio::process::Command::new("kubectl")
        .args(&args.args)
        .env("KUBECONFIG", &kubeconfig)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| SpaceError::from(e).context("failed to execute kubectl"))?;

    Ok(match status.code() {
        Some(0) => ExitCode::SUCCESS,
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        None => ExitCode::FAILURE,
    })
}
