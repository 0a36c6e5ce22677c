/// Configuration constants for the Kubespaces API
pub mod api {
    use std::time::Duration;

    /// Versioned path prefix shared by every endpoint
    pub const BASE_PATH: &str = "/api/v1";

    /// Token refresh endpoint (bypasses the retrying request path)
    pub const REFRESH_PATH: &str = "/api/v1/user/refresh";

    /// Timeout applied to every outbound request, including refresh
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connect timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Configuration constants for the credentials file
pub mod credentials {
    /// Credentials file name (relative to HOME)
    pub const FILE_NAME: &str = ".spacectl";

    /// Default API base URL written on first run
    pub const DEFAULT_API_URL: &str = "http://localhost:8080";

    /// Default tenant cloud provider
    pub const DEFAULT_CLOUD: &str = "eks";

    /// Default tenant region
    pub const DEFAULT_REGION: &str = "eu";

    /// Default tenant compute quota (cores)
    pub const DEFAULT_COMPUTE: u32 = 2;

    /// Default tenant memory quota (GB)
    pub const DEFAULT_MEMORY: u32 = 4;
}

/// Configuration constants for the GitHub login callback listener
pub mod callback {
    use std::time::Duration;

    /// Default local port for the OAuth callback
    pub const DEFAULT_PORT: u16 = 8081;

    /// How long to wait for the browser to hand back tokens
    pub const WAIT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

    /// Grace period for in-flight responses before the listener is forced down
    pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);
}

/// Configuration constants for the kubeconfig cache used by `tenant kubectl`
pub mod kubeconfig {
    use std::time::Duration;

    /// Cache directory name under the system temp dir
    pub const CACHE_DIR: &str = "spacectl-kubeconfigs";

    /// Cached kubeconfigs younger than this are reused
    pub const MAX_AGE: Duration = Duration::from_secs(60 * 60);
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default output format
    pub const OUTPUT: &str = "table";

    /// Default role for new members and invitations
    pub const ROLE: &str = "member";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_path_is_under_base_path() {
        assert!(api::REFRESH_PATH.starts_with(api::BASE_PATH));
    }

    #[test]
    fn test_default_api_url_has_scheme() {
        assert!(credentials::DEFAULT_API_URL.starts_with("http://"));
    }

    #[test]
    fn test_callback_wait_longer_than_grace() {
        assert!(callback::WAIT_TIMEOUT > callback::SHUTDOWN_GRACE);
        assert_eq!(callback::WAIT_TIMEOUT.as_secs(), 300);
    }
}
