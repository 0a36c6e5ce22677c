//! Authenticated HTTP transport for the Kubespaces API

use log::{debug, log_enabled, trace, warn, Level};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{redirect, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::auth::{LoginResponse, RefreshTokenRequest};
use crate::api::redact::redact_sensitive_json;
use crate::config::api;
use crate::credentials::{CredentialStore, Credentials};
use crate::error::{Result, SpaceError};

/// Raw outcome of one request: status, headers and the full body
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Decode a 2xx JSON body, or turn any other status into [`SpaceError::Api`]
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        if !self.status.is_success() {
            return Err(self.into_error());
        }
        serde_json::from_slice(&self.body).map_err(|e| {
            SpaceError::Serialization(format!("failed to decode response: {}", e))
        })
    }

    /// Accept any 2xx status and ignore the body
    pub fn success(self) -> Result<()> {
        if !self.status.is_success() {
            return Err(self.into_error());
        }
        Ok(())
    }

    /// Body of a 2xx response as text
    pub fn text(self) -> Result<String> {
        if !self.status.is_success() {
            return Err(self.into_error());
        }
        String::from_utf8(self.body)
            .map_err(|e| SpaceError::Serialization(format!("response is not UTF-8: {}", e)))
    }

    /// Build the API error, preferring the `{"error": "..."}` envelope over the raw body
    pub fn into_error(self) -> SpaceError {
        let message = match serde_json::from_slice::<ErrorResponse>(&self.body) {
            Ok(envelope) => envelope.error,
            Err(_) => String::from_utf8_lossy(&self.body).trim().to_string(),
        };
        SpaceError::Api {
            status: self.status.as_u16(),
            message,
        }
    }
}

/// Conventional error envelope returned by the backend
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Kubespaces API client
///
/// Owns the credential store for the lifetime of a command so the refresh
/// path can update and persist tokens. Requests are issued one at a time;
/// two concurrent 401s would each run their own refresh cycle.
pub struct ApiClient {
    http: Client,
    /// Same settings as `http` but never follows redirects
    redirectless: Client,
    base_url: String,
    store: CredentialStore,
}

impl ApiClient {
    /// Create a client targeting the API URL stored in the credentials
    pub fn new(store: CredentialStore) -> Self {
        let base_url = store
            .credentials()
            .api_url
            .trim_end_matches('/')
            .to_string();

        Self {
            http: build_http_client(redirect::Policy::default()),
            redirectless: build_http_client(redirect::Policy::none()),
            base_url,
            store,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CredentialStore {
        &mut self.store
    }

    pub fn credentials(&self) -> &Credentials {
        self.store.credentials()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Fail with [`SpaceError::NotAuthenticated`] unless both tokens are stored
    pub fn require_auth(&self) -> Result<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(SpaceError::NotAuthenticated)
        }
    }

    /// Build a full URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn redirectless(&self) -> &Client {
        &self.redirectless
    }

    /// Issue one logical request.
    ///
    /// A 401 with a stored refresh token triggers exactly one refresh and one
    /// retry of the identical request. A failed refresh ends the call.
    pub async fn execute<B>(
        &mut self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| SpaceError::Serialization(format!("failed to encode request: {}", e)))?;
        let url = self.url(path);

        let response = self.send(&method, &url, payload.as_deref()).await?;
        if response.status != StatusCode::UNAUTHORIZED
            || self.store.credentials().refresh_token.is_empty()
        {
            return Ok(response);
        }

        debug!("Access token rejected for {} {}, refreshing", method, url);
        self.refresh_session().await?;
        self.send(&method, &url, payload.as_deref()).await
    }

    pub(crate) async fn get(&mut self, path: &str) -> Result<ApiResponse> {
        self.execute::<()>(Method::GET, path, None).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(
        &mut self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse> {
        self.execute(Method::POST, path, Some(body)).await
    }

    /// POST without a request body
    pub(crate) async fn post_empty(&mut self, path: &str) -> Result<ApiResponse> {
        self.execute::<()>(Method::POST, path, None).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized>(
        &mut self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse> {
        self.execute(Method::PUT, path, Some(body)).await
    }

    /// PUT without a request body
    pub(crate) async fn put_empty(&mut self, path: &str) -> Result<ApiResponse> {
        self.execute::<()>(Method::PUT, path, None).await
    }

    pub(crate) async fn patch<B: Serialize + ?Sized>(
        &mut self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse> {
        self.execute(Method::PATCH, path, Some(body)).await
    }

    pub(crate) async fn delete(&mut self, path: &str) -> Result<ApiResponse> {
        self.execute::<()>(Method::DELETE, path, None).await
    }

    /// Send a single request with the current access token
    async fn send(
        &self,
        method: &Method,
        url: &str,
        payload: Option<&[u8]>,
    ) -> Result<ApiResponse> {
        log_outbound(method, url, payload);

        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");
        let token = &self.store.credentials().access_token;
        if !token.is_empty() {
            builder = builder.bearer_auth(token);
        }
        if let Some(payload) = payload {
            builder = builder.body(payload.to_vec());
        }

        let response = read_response(builder.send().await?).await?;
        log_inbound(method, url, &response);
        Ok(response)
    }

    /// Exchange the refresh token for a new session.
    ///
    /// Goes straight to the HTTP client so a 401 here can never recurse.
    /// Any non-200 answer wipes the stored tokens on disk before failing.
    async fn refresh_session(&mut self) -> Result<()> {
        let url = self.url(api::REFRESH_PATH);
        let request = RefreshTokenRequest {
            refresh_token: self.store.credentials().refresh_token.clone(),
        };
        let payload = serde_json::to_vec(&request)?;
        log_outbound(&Method::POST, &url, Some(&payload));

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;
        let response = read_response(response).await?;
        log_inbound(&Method::POST, &url, &response);

        if response.status != StatusCode::OK {
            self.store.clear_auth();
            if let Err(e) = self.store.save() {
                warn!("Failed to persist cleared credentials: {}", e);
            }
            return Err(SpaceError::AuthExpired(format!(
                "session expired (HTTP {}). Please run 'spacectl auth login' to re-authenticate",
                response.status.as_u16()
            )));
        }

        let session: LoginResponse = serde_json::from_slice(&response.body).map_err(|e| {
            SpaceError::Serialization(format!("failed to decode refresh response: {}", e))
        })?;
        self.store.update_tokens(
            &session.access_token,
            &session.refresh_token,
            &session.user.email,
        );
        self.store
            .save()
            .map_err(|e| e.context("token refreshed but could not be saved"))?;

        debug!("Session refreshed for {}", session.user.email);
        Ok(())
    }

    /// Create a client with custom base URL and tokens (for testing with mock servers)
    #[cfg(test)]
    pub(crate) fn for_tests(
        base_url: &str,
        access_token: &str,
        refresh_token: &str,
        path: &std::path::Path,
    ) -> Self {
        let credentials = Credentials {
            api_url: base_url.to_string(),
            access_token: access_token.to_string(),
            refresh_token: refresh_token.to_string(),
            user_email: "dev@example.com".to_string(),
            ..Credentials::default()
        };
        Self::new(CredentialStore::with_credentials(path, credentials))
    }
}

fn build_http_client(policy: redirect::Policy) -> Client {
    Client::builder()
        .connect_timeout(api::CONNECT_TIMEOUT)
        .timeout(api::REQUEST_TIMEOUT)
        .redirect(policy)
        .build()
        .unwrap_or_else(|_| Client::new())
}

async fn read_response(response: reqwest::Response) -> Result<ApiResponse> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?.to_vec();
    Ok(ApiResponse {
        status,
        headers,
        body,
    })
}

fn log_outbound(method: &Method, url: &str, payload: Option<&[u8]>) {
    if !log_enabled!(Level::Debug) {
        return;
    }
    debug!("-> {} {}", method, url);
    if let Some(payload) = payload {
        debug!("   body: {}", redact_sensitive_json(&String::from_utf8_lossy(payload)));
    }
}

fn log_inbound(method: &Method, url: &str, response: &ApiResponse) {
    debug!("<- {} {} : {}", method, url, response.status.as_u16());
    if log_enabled!(Level::Trace) && !response.body.is_empty() {
        trace!(
            "   body: {}",
            redact_sensitive_json(&String::from_utf8_lossy(&response.body))
        );
    }
}
