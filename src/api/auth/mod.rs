//! Authentication module

mod api;
mod callback;
mod commands;
mod models;

pub use callback::{CallbackReceiver, TokenHandoff};
pub use commands::{run_auth_command, run_register, run_whoami};
pub use models::{LoginResponse, RefreshTokenRequest, User, UserPreferences};
