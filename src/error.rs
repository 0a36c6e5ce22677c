use std::fmt;

/// Custom error type for spacectl operations
#[derive(Debug)]
pub enum SpaceError {
    /// Bad CLI input, unsupported output format or unreadable config file
    Config(String),
    /// The request never produced a response (DNS, refused connection, timeout)
    Network(reqwest::Error),
    /// Token refresh was rejected; local credentials have been wiped
    AuthExpired(String),
    /// The command needs stored tokens and there are none
    NotAuthenticated,
    /// API returned a non-2xx response
    Api { status: u16, message: String },
    /// Request or response body could not be encoded/decoded
    Serialization(String),
    /// Failed to write the credentials file
    Storage(String),
    /// Interactive login did not complete
    Login(String),
    /// Terminal or output I/O failure
    Io(std::io::Error),
    /// Another error with a human-readable prefix
    Context {
        context: String,
        source: Box<SpaceError>,
    },
}

impl SpaceError {
    /// Prefix this error with context, keeping its kind reachable through [`SpaceError::root`]
    pub fn context(self, context: impl Into<String>) -> Self {
        SpaceError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with all context layers removed
    pub fn root(&self) -> &SpaceError {
        match self {
            SpaceError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when the user has to log in again before retrying
    pub fn requires_login(&self) -> bool {
        matches!(
            self.root(),
            SpaceError::AuthExpired(_) | SpaceError::NotAuthenticated
        )
    }
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SpaceError::Network(e) => match e.url() {
                Some(url) => write!(f, "could not reach {}: {}", url, e),
                None => write!(f, "network error: {}", e),
            },
            SpaceError::AuthExpired(msg) => write!(f, "{}", msg),
            SpaceError::NotAuthenticated => write!(
                f,
                "not authenticated. Please run 'spacectl auth login' first"
            ),
            SpaceError::Api { status, message } => {
                write!(f, "API error ({}): {}", status, message)
            }
            SpaceError::Serialization(msg) => write!(f, "JSON error: {}", msg),
            SpaceError::Storage(msg) => write!(f, "{}", msg),
            SpaceError::Login(msg) => write!(f, "login failed: {}", msg),
            SpaceError::Io(e) => write!(f, "I/O error: {}", e),
            SpaceError::Context { context, source } => write!(f, "{}: {}", context, source),
        }
    }
}

impl std::error::Error for SpaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpaceError::Network(e) => Some(e),
            SpaceError::Io(e) => Some(e),
            SpaceError::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SpaceError {
    fn from(err: reqwest::Error) -> Self {
        SpaceError::Network(err)
    }
}

impl From<serde_json::Error> for SpaceError {
    fn from(err: serde_json::Error) -> Self {
        SpaceError::Serialization(err.to_string())
    }
}

impl From<serde_yml::Error> for SpaceError {
    fn from(err: serde_yml::Error) -> Self {
        SpaceError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for SpaceError {
    fn from(err: std::io::Error) -> Self {
        SpaceError::Io(err)
    }
}

impl From<dialoguer::Error> for SpaceError {
    fn from(err: dialoguer::Error) -> Self {
        SpaceError::Io(std::io::Error::other(err))
    }
}

/// Result type alias for spacectl operations
pub type Result<T> = std::result::Result<T, SpaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = SpaceError::Api {
            status: 404,
            message: "organization not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (404): organization not found");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpaceError>();
    }

    #[test]
    fn test_config_error_display() {
        let err = SpaceError::Config("unsupported format: xml".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_not_authenticated_suggests_login() {
        let err = SpaceError::NotAuthenticated;
        assert!(err.to_string().contains("spacectl auth login"));
        assert!(err.requires_login());
    }

    #[test]
    fn test_context_keeps_kind() {
        let err = SpaceError::AuthExpired("session expired".to_string())
            .context("failed to list organizations");
        assert_eq!(
            err.to_string(),
            "failed to list organizations: session expired"
        );
        assert!(matches!(err.root(), SpaceError::AuthExpired(_)));
        assert!(err.requires_login());
    }

    #[test]
    fn test_nested_context_root() {
        let err = SpaceError::Api {
            status: 500,
            message: "boom".to_string(),
        }
        .context("inner")
        .context("outer");
        assert_eq!(err.to_string(), "outer: inner: API error (500): boom");
        assert!(matches!(err.root(), SpaceError::Api { status: 500, .. }));
        assert!(!err.requires_login());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: SpaceError = json_err.into();
        match err {
            SpaceError::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected SpaceError::Serialization"),
        }
    }

    #[test]
    fn test_from_io_error() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: SpaceError = io_err.into();
        assert!(matches!(err, SpaceError::Io(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_none_for_api() {
        use std::error::Error;
        let err = SpaceError::Api {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}
