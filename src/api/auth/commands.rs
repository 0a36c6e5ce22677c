//! Authentication command handlers

use log::{debug, warn};

use crate::api::ApiClient;
use crate::cli::{AuthCommand, LoginArgs, RegisterArgs, RunContext};
use crate::config::callback;
use crate::error::Result;
use crate::ui::{email_or_prompt, finish_spinner, open_browser, password_or_prompt};

use super::callback::CallbackReceiver;

/// Run an `auth` subcommand
pub async fn run_auth_command(
    client: &mut ApiClient,
    ctx: &RunContext,
    command: &AuthCommand,
) -> Result<()> {
    match command {
        AuthCommand::Login(args) if args.github => {
            github_login(client, ctx, args.callback_port).await
        }
        AuthCommand::Login(args) => password_login(client, ctx, args).await,
        AuthCommand::Logout => {
            client.store_mut().clear_auth();
            client
                .store()
                .save()
                .map_err(|e| e.context("failed to save config"))?;
            ctx.success("Successfully logged out");
            Ok(())
        }
        AuthCommand::GithubLogin(args) => {
            warn!("'auth github-login' is deprecated, use 'spacectl auth login --github' instead");
            github_login(client, ctx, args.callback_port).await
        }
        AuthCommand::Verify(args) => {
            client
                .verify_email(&args.email, &args.code)
                .await
                .map_err(|e| e.context("verification failed"))?;
            ctx.success(&format!("Successfully verified {}", args.email));
            Ok(())
        }
        AuthCommand::ResendVerification(args) => {
            client
                .resend_verification_code(&args.email)
                .await
                .map_err(|e| e.context("failed to resend verification code"))?;
            ctx.success(&format!("Verification code sent to {}", args.email));
            Ok(())
        }
    }
}

/// Create an account; the user still has to verify the email address
pub async fn run_register(
    client: &mut ApiClient,
    ctx: &RunContext,
    args: &RegisterArgs,
) -> Result<()> {
    let email = email_or_prompt(args.email.as_deref())?;
    let password = password_or_prompt(args.password.as_deref(), true)?;
    client
        .register(&email, &password)
        .await
        .map_err(|e| e.context("registration failed"))?;
    ctx.success(&format!(
        "Successfully registered {}. Please check your email for verification instructions.",
        email
    ));
    Ok(())
}

/// Print the signed-in user
pub async fn run_whoami(client: &mut ApiClient, ctx: &RunContext) -> Result<()> {
    let user = client
        .get_user_info()
        .await
        .map_err(|e| e.context("failed to get user info"))?;
    ctx.formatter.print(&user)
}

async fn password_login(client: &mut ApiClient, ctx: &RunContext, args: &LoginArgs) -> Result<()> {
    let email = email_or_prompt(args.email.as_deref())?;
    let password = password_or_prompt(args.password.as_deref(), false)?;

    let session = client
        .login(&email, &password)
        .await
        .map_err(|e| e.context("login failed"))?;

    let store = client.store_mut();
    store.update_tokens(&session.access_token, &session.refresh_token, &session.user.email);
    store
        .save()
        .map_err(|e| e.context("failed to save config"))?;

    ctx.success(&format!("Successfully logged in as {}", session.user.email));
    Ok(())
}

async fn github_login(client: &mut ApiClient, ctx: &RunContext, port: u16) -> Result<()> {
    let mut receiver = CallbackReceiver::start(port).await;

    if receiver.is_listening() {
        let auth_url = match client.get_github_auth_url(receiver.port()).await {
            Ok(url) => url,
            Err(e) => {
                receiver.shutdown().await;
                return Err(e.context("failed to get GitHub auth URL"));
            }
        };
        debug!("GitHub authorization URL: {}", auth_url);

        if open_browser(&auth_url) {
            ctx.success("Opening browser for GitHub authentication...");
        } else {
            println!("Please open this URL in your browser:\n{}", auth_url);
        }
    }

    let spinner = ctx.spinner("Waiting for GitHub authentication...");
    let outcome = receiver.wait(callback::WAIT_TIMEOUT).await;
    finish_spinner(spinner);
    let handoff = outcome?;

    let store = client.store_mut();
    store.update_tokens(
        &handoff.access_token,
        &handoff.refresh_token,
        &handoff.user_email,
    );
    store
        .save()
        .map_err(|e| e.context("failed to save config"))?;

    ctx.success(&format!(
        "Successfully logged in as {} via GitHub",
        handoff.user_email
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::credentials::CredentialStore;
    use crate::output::Formatter;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn quiet() -> RunContext {
        RunContext::new(Formatter::new(OutputFormat::Table, false), true)
    }

    #[tokio::test]
    async fn test_login_stores_session() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let cfg = dir.path().join("cfg");
        let mut client = ApiClient::for_tests(&mock_server.uri(), "", "", &cfg);

        Mock::given(method("POST"))
            .and(path("/api/v1/user/login"))
            .and(body_json(json!({"email": "dev@example.com", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "new-access",
                "refresh_token": "new-refresh",
                "user": {"id": "u-1", "email": "dev@example.com"}
            })))
            .mount(&mock_server)
            .await;

        let args = LoginArgs {
            email: Some("dev@example.com".to_string()),
            password: Some("pw".to_string()),
            github: false,
            callback_port: callback::DEFAULT_PORT,
        };
        run_auth_command(&mut client, &quiet(), &AuthCommand::Login(args))
            .await
            .unwrap();

        let saved = CredentialStore::load(&cfg).unwrap();
        assert_eq!(saved.credentials().access_token, "new-access");
        assert_eq!(saved.credentials().refresh_token, "new-refresh");
        assert_eq!(saved.credentials().user_email, "dev@example.com");
    }

    #[tokio::test]
    async fn test_failed_login_keeps_file_untouched() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let cfg = dir.path().join("cfg");
        let mut client = ApiClient::for_tests(&mock_server.uri(), "", "", &cfg);

        Mock::given(method("POST"))
            .and(path("/api/v1/user/login"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "invalid credentials"})),
            )
            .mount(&mock_server)
            .await;

        let args = LoginArgs {
            email: Some("dev@example.com".to_string()),
            password: Some("wrong".to_string()),
            github: false,
            callback_port: callback::DEFAULT_PORT,
        };
        let err = run_auth_command(&mut client, &quiet(), &AuthCommand::Login(args))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "login failed: API error (400): invalid credentials");
        assert!(!cfg.exists());
    }

    #[tokio::test]
    async fn test_logout_clears_tokens_on_disk() {
        let dir = TempDir::new().unwrap();
        let cfg = dir.path().join("cfg");
        let mut client = ApiClient::for_tests("http://127.0.0.1:9", "a", "r", &cfg);

        run_auth_command(&mut client, &quiet(), &AuthCommand::Logout)
            .await
            .unwrap();

        let saved = CredentialStore::load(&cfg).unwrap();
        assert!(!saved.is_authenticated());
        assert!(saved.credentials().user_email.is_empty());
        assert_eq!(saved.credentials().api_url, "http://127.0.0.1:9");
    }

    #[tokio::test]
    async fn test_register_with_flags() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client = ApiClient::for_tests(&mock_server.uri(), "", "", &dir.path().join("cfg"));

        Mock::given(method("POST"))
            .and(path("/api/v1/user/register"))
            .and(body_json(json!({"email": "new@example.com", "password": "secret"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "ok"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let args = RegisterArgs {
            email: Some("new@example.com".to_string()),
            password: Some("secret".to_string()),
        };
        run_register(&mut client, &quiet(), &args).await.unwrap();
    }

    #[tokio::test]
    async fn test_github_login_reports_bind_failure() {
        let dir = TempDir::new().unwrap();
        let mut client =
            ApiClient::for_tests("http://127.0.0.1:9", "", "", &dir.path().join("cfg"));

        let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = occupied.local_addr().unwrap().port();

        let err = github_login(&mut client, &quiet(), port).await.unwrap_err();
        assert!(err.to_string().contains("failed to start callback server"));
    }
}
