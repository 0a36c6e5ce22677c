//! Credentials file I/O

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::credentials as credentials_config;
use crate::error::SpaceError;

use super::models::Credentials;

/// Owns the in-memory credentials and the file they are persisted to
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    credentials: Credentials,
}

impl CredentialStore {
    /// Default credentials path (~/.spacectl)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(credentials_config::FILE_NAME)
    }

    /// Load credentials from `path`.
    /// A missing file yields defaults, a corrupt file is a config error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, SpaceError> {
        let path = path.into();
        if !path.exists() {
            debug!("No credentials file at {}, using defaults", path.display());
            return Ok(Self {
                path,
                credentials: Credentials::default(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            SpaceError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let credentials = serde_json::from_str(&content).map_err(|e| {
            SpaceError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self { path, credentials })
    }

    /// Build a store around already-known credentials without touching disk
    pub fn with_credentials(path: impl Into<PathBuf>, credentials: Credentials) -> Self {
        Self {
            path: path.into(),
            credentials,
        }
    }

    /// Persist the credentials.
    /// Creates the parent dir, writes a temp file created as 0600, then renames it over the target.
    pub fn save(&self) -> Result<(), SpaceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                SpaceError::Storage(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.credentials)
            .map_err(|e| SpaceError::Serialization(format!("Failed to encode config: {}", e)))?;

        let tmp_path = tmp_sibling(&self.path);
        let mut file = create_private(&tmp_path).map_err(|e| {
            SpaceError::Storage(format!(
                "Failed to create temp config file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| {
                SpaceError::Storage(format!(
                    "Failed to write temp config file {}: {}",
                    tmp_path.display(),
                    e
                ))
            })?;
        drop(file);

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            SpaceError::Storage(format!(
                "Failed to rename temp config file to {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!("Saved credentials to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated()
    }

    pub fn clear_auth(&mut self) {
        self.credentials.clear_auth();
    }

    pub fn update_tokens(&mut self, access_token: &str, refresh_token: &str, user_email: &str) {
        self.credentials
            .update_tokens(access_token, refresh_token, user_email);
    }
}

/// Create `path` fresh with owner-only permissions (0600 on unix).
/// A leftover file from an interrupted save is removed first.
fn create_private(path: &Path) -> io::Result<File> {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from(credentials_config::FILE_NAME));
    name.push(".tmp");
    path.with_file_name(name)
}
