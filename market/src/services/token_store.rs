//! # Token Persistence
//!
//! The access token is the only client state that survives a restart. It is kept in a
//! small JSON file:
//!
//! ```text
//! {
//!   "access_token": "eyJhbGciOi..."
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::error::{AppError, Result};
use crate::core::service::TokenStore;

#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    access_token: String,
}

/// File-backed [`TokenStore`]
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let stored: StoredToken = serde_json::from_str(&content)
            .map_err(|e| AppError::Storage(format!("Unreadable token file {}: {}", self.path.display(), e)))?;

        Ok(Some(stored.access_token).filter(|token| !token.is_empty()))
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&StoredToken {
            access_token: token.to_string(),
        })
        .map_err(|e| AppError::Storage(e.to_string()))?;

        std::fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), "Saved access token");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
