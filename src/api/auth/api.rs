//! Authentication API operations

use log::debug;
use reqwest::header::{CONTENT_TYPE, LOCATION};
use reqwest::StatusCode;

use crate::api::ApiClient;
use crate::error::{Result, SpaceError};

use super::models::{
    LoginRequest, LoginResponse, ResendVerificationRequest, User, UserPreferences,
    VerifyEmailRequest,
};

impl ApiClient {
    /// Exchange email and password for a session
    pub async fn login(&mut self, email: &str, password: &str) -> Result<LoginResponse> {
        debug!("Logging in as {}", email);
        self.post("/api/v1/user/login", &LoginRequest { email, password })
            .await?
            .json()
    }

    pub async fn register(&mut self, email: &str, password: &str) -> Result<()> {
        self.post("/api/v1/user/register", &LoginRequest { email, password })
            .await?
            .success()
    }

    pub async fn verify_email(&mut self, email: &str, code: &str) -> Result<()> {
        self.post("/api/v1/user/verify", &VerifyEmailRequest { email, code })
            .await?
            .success()
    }

    pub async fn resend_verification_code(&mut self, email: &str) -> Result<()> {
        self.post(
            "/api/v1/user/verify/resend",
            &ResendVerificationRequest { email },
        )
        .await?
        .success()
    }

    /// Current user's profile
    pub async fn get_user_info(&mut self) -> Result<User> {
        self.get("/api/v1/user/info").await?.json()
    }

    pub async fn update_preferences(&mut self, preferences: &UserPreferences) -> Result<()> {
        self.put("/api/v1/user/preferences", preferences)
            .await?
            .success()
    }

    /// Ask the backend where to send the browser for GitHub sign-in.
    ///
    /// The backend answers with a redirect; its `Location` is the URL.
    pub async fn get_github_auth_url(&self, callback_port: u16) -> Result<String> {
        let url = self.url(&format!(
            "/api/v1/auth/github?cli=true&callback_port={}",
            callback_port
        ));
        debug!("Requesting GitHub authorization URL from {}", url);

        let mut request = self
            .redirectless()
            .get(&url)
            .header(CONTENT_TYPE, "application/json");
        let token = &self.credentials().access_token;
        if !token.is_empty() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        let status = response.status();
        if matches!(
            status,
            StatusCode::FOUND | StatusCode::TEMPORARY_REDIRECT
        ) {
            if let Some(location) = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.is_empty())
            {
                return Ok(location.to_string());
            }
        }

        Err(SpaceError::Login(format!(
            "failed to get GitHub OAuth URL: status {}",
            status.as_u16()
        )))
    }
}

#[cfg(test)]
mod tests {
    use crate::api::ApiClient;
    use crate::error::SpaceError;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn user_json() -> serde_json::Value {
        json!({
            "id": "u-1",
            "email": "dev@example.com",
            "provider": "local",
            "approved": true,
            "email_verified": true,
            "is_admin": false,
            "preferences": {"welcome_dismissed": true, "theme": "dark"},
            "created_at": "2025-03-01T10:00:00Z",
            "updated_at": "2025-03-02T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_login_success() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client = ApiClient::for_tests(&mock_server.uri(), "", "", &dir.path().join("cfg"));

        Mock::given(method("POST"))
            .and(path("/api/v1/user/login"))
            .and(body_json(json!({"email": "dev@example.com", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "a1",
                "refresh_token": "r1",
                "user": user_json()
            })))
            .mount(&mock_server)
            .await;

        let session = client.login("dev@example.com", "pw").await.unwrap();
        assert_eq!(session.access_token, "a1");
        assert_eq!(session.user.email, "dev@example.com");
    }

    #[tokio::test]
    async fn test_login_bad_credentials() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client = ApiClient::for_tests(&mock_server.uri(), "", "", &dir.path().join("cfg"));

        Mock::given(method("POST"))
            .and(path("/api/v1/user/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "invalid credentials"})),
            )
            .mount(&mock_server)
            .await;

        let err = client.login("dev@example.com", "nope").await.unwrap_err();
        assert_eq!(err.to_string(), "API error (401): invalid credentials");
    }

    #[tokio::test]
    async fn test_get_user_info() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client =
            ApiClient::for_tests(&mock_server.uri(), "a", "r", &dir.path().join("cfg"));

        Mock::given(method("GET"))
            .and(path("/api/v1/user/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
            .mount(&mock_server)
            .await;

        let user = client.get_user_info().await.unwrap();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.preferences.unwrap().theme, "dark");
    }

    #[tokio::test]
    async fn test_verify_email_posts_code() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client = ApiClient::for_tests(&mock_server.uri(), "", "", &dir.path().join("cfg"));

        Mock::given(method("POST"))
            .and(path("/api/v1/user/verify"))
            .and(body_json(json!({"email": "dev@example.com", "code": "123456"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        client
            .verify_email("dev@example.com", "123456")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_preferences_puts_whole_object() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client =
            ApiClient::for_tests(&mock_server.uri(), "a", "r", &dir.path().join("cfg"));

        Mock::given(method("PUT"))
            .and(path("/api/v1/user/preferences"))
            .and(body_json(json!({"welcome_dismissed": true, "theme": "light"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let preferences = crate::api::auth::UserPreferences {
            welcome_dismissed: true,
            theme: "light".to_string(),
        };
        client.update_preferences(&preferences).await.unwrap();
    }

    #[tokio::test]
    async fn test_github_auth_url_from_redirect() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let client = ApiClient::for_tests(&mock_server.uri(), "", "", &dir.path().join("cfg"));

        Mock::given(method("GET"))
            .and(path("/api/v1/auth/github"))
            .and(query_param("cli", "true"))
            .and(query_param("callback_port", "8081"))
            .respond_with(
                ResponseTemplate::new(307)
                    .insert_header("Location", "https://github.com/login/oauth/authorize?x=1"),
            )
            .mount(&mock_server)
            .await;

        let url = client.get_github_auth_url(8081).await.unwrap();
        assert_eq!(url, "https://github.com/login/oauth/authorize?x=1");
    }

    #[tokio::test]
    async fn test_github_auth_url_without_redirect_fails() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let client = ApiClient::for_tests(&mock_server.uri(), "", "", &dir.path().join("cfg"));

        Mock::given(method("GET"))
            .and(path("/api/v1/auth/github"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let err = client.get_github_auth_url(9000).await.unwrap_err();
        assert!(matches!(err, SpaceError::Login(_)));
        assert!(err.to_string().contains("status 200"));
    }
}
