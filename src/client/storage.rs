//! Durable session storage.
//!
//! The browser keeps its session in local storage; this client keeps it in
//! a small JSON file under the platform data directory. Written on login,
//! cleared on logout or when the server rejects the token.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::client::session::ClientSession;

/// File-backed store for the current session
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    /// Storage at an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform-specific default location
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wayfare")
            .join("session.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session, if any
    ///
    /// Unreadable or unparsable files count as "no session": the caller
    /// falls back to anonymous rather than erroring on a stale file.
    pub fn load(&self) -> Option<ClientSession> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!("Discarding unreadable stored session: {}", err);
                None
            }
        }
    }

    /// Persist the session
    pub fn save(&self, session: &ClientSession) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(session)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(&self.path, raw)
    }

    /// Remove the stored session
    pub fn clear(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != io::ErrorKind::NotFound {
                tracing::warn!("Failed to clear stored session: {}", err);
            }
        }
    }
}

impl Default for SessionStorage {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}
