//! UI utilities for terminal output
//!
//! Progress spinners, credential prompts, confirmations and the browser launcher.

mod browser;
mod confirm;
mod prompt;
mod spinner;

pub use browser::open_browser;
pub use confirm::{confirm_deletion, is_confirmation};
pub use prompt::{email_or_prompt, password_or_prompt};
pub use spinner::{create_spinner, finish_spinner};
