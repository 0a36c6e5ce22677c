//! spacectl - Main entry point

use std::io::ErrorKind;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use spacectl::{
    run_auth_command, run_org_command, run_project_command, run_register, run_tenant_command,
    run_whoami, ApiClient, Cli, Command, CredentialStore, Formatter, Result, RunContext,
    SpaceError,
};

const DEBUG_FILTER: &str = "warn,spacectl=debug";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.as_str()),
    );
    // --debug turns on the request/response echo for this crate, over RUST_LOG too
    if cli.debug {
        logger.parse_filters(DEBUG_FILTER);
    }
    logger.init();

    debug!("Starting spacectl v{}", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(code) => code,
        // Output piped into something like `head` that stopped reading
        Err(e) if matches!(e.root(), SpaceError::Io(io) if io.kind() == ErrorKind::BrokenPipe) => {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    if let Command::Version = cli.command {
        println!("spacectl {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    let ctx = RunContext::new(Formatter::from_name(&cli.output, cli.no_headers)?, cli.quiet);

    let path = cli.config.clone().unwrap_or_else(CredentialStore::default_path);
    debug!("Using credentials file {}", path.display());
    let mut store = CredentialStore::load(path).map_err(|e| e.context("failed to load config"))?;
    if let Some(url) = cli.api_url.as_deref().filter(|url| !url.is_empty()) {
        store.credentials_mut().api_url = url.to_string();
    }

    let mut client = ApiClient::new(store);
    if cli.command.requires_auth() {
        client.require_auth()?;
    }

    match &cli.command {
        Command::Version => {}
        Command::Whoami => run_whoami(&mut client, &ctx).await?,
        Command::Register(args) => run_register(&mut client, &ctx, args).await?,
        Command::Auth { command } => run_auth_command(&mut client, &ctx, command).await?,
        Command::Org { command } => run_org_command(&mut client, &ctx, command).await?,
        Command::Project { command } => run_project_command(&mut client, &ctx, command).await?,
        Command::Tenant { command } => {
            return run_tenant_command(&mut client, &ctx, command).await;
        }
    }
    Ok(ExitCode::SUCCESS)
}
