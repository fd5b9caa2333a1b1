//! Session persistence.
//!
//! The device keeps the signed-in session between launches. The store is
//! a trait so tests (and platforms with their own secure storage) can
//! swap the file-backed default.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use super::AuthSession;
use crate::{Error, Result};

/// Local persistence for the signed-in session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Result<Option<AuthSession>>;
    async fn save(&self, session: &AuthSession) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}

/// JSON file on device storage.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<AuthSession>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // A corrupt session file reads as signed out.
                debug!("Discarding unreadable session file: {}", e);
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &AuthSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let bytes = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store; the default for tests and ephemeral handles.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<AuthSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<AuthSession>> {
        self.inner
            .lock()
            .map(|s| s.clone())
            .map_err(|_| Error::Internal("Session store poisoned".into()))
    }

    async fn save(&self, session: &AuthSession) -> Result<()> {
        self.inner
            .lock()
            .map(|mut s| *s = Some(session.clone()))
            .map_err(|_| Error::Internal("Session store poisoned".into()))
    }

    async fn clear(&self) -> Result<()> {
        self.inner
            .lock()
            .map(|mut s| *s = None)
            .map_err(|_| Error::Internal("Session store poisoned".into()))
    }
}
