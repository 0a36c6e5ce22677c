//! Authentication data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::output::{renderable_item, ToRecord};

/// The signed-in user
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl ToRecord for User {}

renderable_item!(User);

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPreferences {
    #[serde(default)]
    pub welcome_dismissed: bool,
    #[serde(default)]
    pub theme: String,
}

#[derive(Serialize, Debug)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Session returned by login and refresh
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

#[derive(Serialize, Debug)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Serialize, Debug)]
pub struct VerifyEmailRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
}

#[derive(Serialize, Debug)]
pub struct ResendVerificationRequest<'a> {
    pub email: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialize_minimal() {
        let user: User =
            serde_json::from_str(r#"{"id":"u-1","email":"dev@example.com"}"#).unwrap();
        assert_eq!(user.email, "dev@example.com");
        assert!(user.preferences.is_none());
        assert_eq!(user.created_at.timestamp(), 0);
    }

    #[test]
    fn test_login_request_serializes_credentials() {
        let req = LoginRequest {
            email: "dev@example.com",
            password: "s3cret",
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"email": "dev@example.com", "password": "s3cret"})
        );
    }
}
