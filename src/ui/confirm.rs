//! Confirmation prompts for destructive operations

use dialoguer::Input;

use crate::error::Result;

/// Ask the user to type `yes`; anything else declines.
///
/// `force` skips the prompt entirely.
pub fn confirm_deletion(prompt: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }
    let answer: String = Input::new()
        .with_prompt(format!("{} Type 'yes' to confirm", prompt))
        .allow_empty(true)
        .interact_text()?;
    Ok(is_confirmation(&answer))
}

/// Only the literal word `yes` confirms
pub fn is_confirmation(answer: &str) -> bool {
    answer.trim() == "yes"
}
