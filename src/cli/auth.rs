//! `auth` command definitions and arguments

use clap::{Args, Subcommand};

use crate::config::callback;

/// Authentication subcommands
#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    /// Log in with email and password, or through GitHub
    Login(LoginArgs),

    /// Forget the stored session
    Logout,

    /// Log in through GitHub (deprecated, use `auth login --github`)
    #[command(hide = true)]
    GithubLogin(GithubLoginArgs),

    /// Confirm an email address with the code you received
    Verify(VerifyArgs),

    /// Send a new verification code
    ResendVerification(ResendArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Password
    #[arg(long)]
    pub password: Option<String>,

    /// Use GitHub OAuth authentication
    #[arg(long, default_value_t = false, conflicts_with_all = ["email", "password"])]
    pub github: bool,

    /// Port for the OAuth callback server (used with --github)
    #[arg(long, default_value_t = callback::DEFAULT_PORT)]
    pub callback_port: u16,
}

#[derive(Args, Debug)]
pub struct GithubLoginArgs {
    /// Port for the OAuth callback server
    #[arg(long, default_value_t = callback::DEFAULT_PORT)]
    pub callback_port: u16,
}

/// Email and password for `register`; prompted when omitted
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Password
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Email address
    #[arg(long)]
    pub email: String,

    /// Verification code
    #[arg(long)]
    pub code: String,
}

#[derive(Args, Debug)]
pub struct ResendArgs {
    /// Email address
    #[arg(long)]
    pub email: String,
}
