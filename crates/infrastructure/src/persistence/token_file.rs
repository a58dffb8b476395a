//! File-backed token storage.
//!
//! The session token lives in a single `buildflow_token` file under the
//! platform config directory. Absence of the file means "no session"; the
//! content is the raw token string, nothing else.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use buildflow_application::ports::{StorageError, TokenStorage};
use buildflow_domain::AuthToken;

/// File-backed token storage.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    /// Name of the stored credential entry.
    pub const FILE_NAME: &'static str = "buildflow_token";

    /// Creates a store over an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store for `buildflow_token` inside the given directory.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(Self::FILE_NAME),
        }
    }

    /// Creates a store under the platform config directory
    /// (`<config>/buildflow/buildflow_token`).
    ///
    /// # Errors
    ///
    /// Returns an error when the platform exposes no config directory.
    pub fn default_location() -> Result<Self, StorageError> {
        let base = dirs::config_dir()
            .ok_or_else(|| StorageError::Backend("no platform config directory".to_string()))?;
        Ok(Self {
            path: base.join("buildflow").join(Self::FILE_NAME),
        })
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStorage for FileTokenStorage {
    async fn load(&self) -> Result<Option<AuthToken>, StorageError> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(AuthToken::new(raw)))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn store(&self, token: &AuthToken) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, token.as_str()).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}
