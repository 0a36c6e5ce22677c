//! Kubeconfig files on disk
//!
//! `tenant kubectl` keeps one kubeconfig per tenant under the system temp
//! directory, named after the MD5 of the tenant ID, and reuses it while it
//! is fresh.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use md5::{Digest, Md5};

use crate::api::ApiClient;
use crate::config::kubeconfig;
use crate::error::{Result, SpaceError};

/// Write `contents` readable by the owner only (0600 on unix)
pub fn write_private(path: &Path, contents: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(contents.as_bytes())?;

    // mode() only applies to newly created files
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}

/// Per-tenant kubeconfig cache
#[derive(Debug, Clone)]
pub struct KubeconfigCache {
    dir: PathBuf,
}

impl KubeconfigCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<tmp>/spacectl-kubeconfigs`
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir().join(kubeconfig::CACHE_DIR))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache file for a tenant
    pub fn path_for(&self, tenant_id: &str) -> PathBuf {
        let mut hasher = Md5::new();
        hasher.update(tenant_id.as_bytes());
        self.dir.join(format!("{:x}.yaml", hasher.finalize()))
    }

    /// True when `path` exists and was modified less than `max_age` ago
    pub fn is_fresh(path: &Path, max_age: Duration) -> bool {
        fs::metadata(path)
            .and_then(|meta| meta.modified())
            .ok()
            .and_then(|modified| modified.elapsed().ok())
            .is_some_and(|age| age < max_age)
    }

    /// Store a kubeconfig, creating the cache directory if needed
    pub fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            SpaceError::from(e).context("failed to create kubeconfig cache directory")
        })?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700))?;
        }
        write_private(path, contents)
            .map_err(|e| e.context("failed to write kubeconfig to cache"))
    }

    /// Path of a usable kubeconfig for `tenant_id`, fetching it unless a fresh copy exists
    pub async fn get_or_fetch(
        &self,
        client: &mut ApiClient,
        tenant_id: &str,
        no_cache: bool,
    ) -> Result<PathBuf> {
        let path = self.path_for(tenant_id);
        if no_cache {
            debug!("Cache disabled, fetching fresh kubeconfig");
        } else if Self::is_fresh(&path, kubeconfig::MAX_AGE) {
            debug!("Using cached kubeconfig {}", path.display());
            return Ok(path);
        }

        let contents = client.get_tenant_kubeconfig(tenant_id).await?;
        self.write(&path, &contents)?;
        debug!("Kubeconfig cached at {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_path_is_md5_of_tenant_id() {
        let cache = KubeconfigCache::new("/tmp/cache");
        assert_eq!(
            cache.path_for("abc"),
            PathBuf::from("/tmp/cache/900150983cd24fb0d6963f7d28e17f72.yaml")
        );
    }

    #[test]
    fn test_freshness() {
        let dir = TempDir::new().unwrap();
        let cache = KubeconfigCache::new(dir.path().join("kc"));
        let path = cache.path_for("t-1");
        assert!(!KubeconfigCache::is_fresh(&path, Duration::from_secs(3600)));

        cache.write(&path, "kind: Config\n").unwrap();
        assert!(KubeconfigCache::is_fresh(&path, Duration::from_secs(3600)));
        assert!(!KubeconfigCache::is_fresh(&path, Duration::ZERO));
    }

    #[cfg(unix)]
    #[test]
    fn test_written_files_are_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let target = dir.path().join("kubeconfig");
        fs::write(&target, "old").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o644)).unwrap();

        write_private(&target, "new").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[tokio::test]
    async fn test_get_or_fetch_reuses_fresh_copy() {
        let mock_server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let mut client =
            ApiClient::for_tests(&mock_server.uri(), "a", "r", &dir.path().join("cfg"));
        let cache = KubeconfigCache::new(dir.path().join("kc"));

        Mock::given(method("GET"))
            .and(path("/api/v1/tenants/t-1/kubeconfig"))
            .respond_with(ResponseTemplate::new(200).set_body_string("kind: Config\n"))
            .expect(2)
            .mount(&mock_server)
            .await;

        let first = cache.get_or_fetch(&mut client, "t-1", false).await.unwrap();
        let second = cache.get_or_fetch(&mut client, "t-1", false).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&first).unwrap(), "kind: Config\n");

        // --no-cache always goes back to the API
        cache.get_or_fetch(&mut client, "t-1", true).await.unwrap();
    }
}
