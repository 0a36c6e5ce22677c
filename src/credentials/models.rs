//! Credentials data model

use serde::{Deserialize, Serialize};

use crate::config::credentials as defaults;

/// Persisted session and default tenant-creation hints
///
/// Fields missing from an existing file load as empty/zero values; only a
/// missing file yields [`Credentials::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub api_url: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_cloud: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_region: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub default_compute: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub default_memory: u32,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            api_url: defaults::DEFAULT_API_URL.to_string(),
            access_token: String::new(),
            refresh_token: String::new(),
            user_email: String::new(),
            default_cloud: defaults::DEFAULT_CLOUD.to_string(),
            default_region: defaults::DEFAULT_REGION.to_string(),
            default_compute: defaults::DEFAULT_COMPUTE,
            default_memory: defaults::DEFAULT_MEMORY,
        }
    }
}

impl Credentials {
    /// Both tokens present
    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty() && !self.refresh_token.is_empty()
    }

    /// Wipe tokens and the user email, keeping the API URL and defaults
    pub fn clear_auth(&mut self) {
        self.access_token.clear();
        self.refresh_token.clear();
        self.user_email.clear();
    }

    /// Replace the session after a login or refresh
    pub fn update_tokens(&mut self, access_token: &str, refresh_token: &str, user_email: &str) {
        self.access_token = access_token.to_string();
        self.refresh_token = refresh_token.to_string();
        self.user_email = user_email.to_string();
    }
}
