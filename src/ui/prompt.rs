//! Credential prompts

use dialoguer::{Input, Password};

use crate::error::Result;

/// Use `value` when given, otherwise ask for it
pub fn email_or_prompt(value: Option<&str>) -> Result<String> {
    match value.filter(|v| !v.is_empty()) {
        Some(email) => Ok(email.to_string()),
        None => Ok(Input::<String>::new().with_prompt("Email").interact_text()?),
    }
}

/// Use `value` when given, otherwise read it without echo
pub fn password_or_prompt(value: Option<&str>, confirm: bool) -> Result<String> {
    if let Some(password) = value.filter(|v| !v.is_empty()) {
        return Ok(password.to_string());
    }
    let mut prompt = Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_given_values_skip_prompts() {
        assert_eq!(email_or_prompt(Some("dev@example.com")).unwrap(), "dev@example.com");
        assert_eq!(password_or_prompt(Some("pw"), true).unwrap(), "pw");
    }
}
