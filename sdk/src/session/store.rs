//! Token stores.
//!
//! Provides the persistence seam behind [`Session`](super::Session).

use std::fmt;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::warn;

use super::error::StoreError;

/// Key the access token is stored under.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Directory under the platform data directory.
pub const APP_DIR: &str = "matedu";

/// File name of the default store.
pub const SESSION_FILE: &str = "session.json";

/// Persistent slot for the session token.
pub trait TokenStore: Send + Sync + fmt::Debug {
    /// Returns the stored token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Stores `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn save(&self, token: &str) -> Result<(), StoreError>;

    /// Removes the stored token. A no-op when none is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Key-value JSON file holding the token under [`ACCESS_TOKEN_KEY`].
///
/// Other keys in the file are preserved. The file is removed once its last
/// key is cleared.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store backed by `path`. Nothing is touched until first use.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at `<data dir>/matedu/session.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no data directory.
    pub fn default_location() -> Result<Self, StoreError> {
        let dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?.join(APP_DIR);
        Ok(Self::new(dir.join(SESSION_FILE)))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Map::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like `read_entries`, but treats an unparsable file as empty.
    fn read_entries_or_reset(&self) -> Result<Map<String, Value>, StoreError> {
        match self.read_entries() {
            Err(StoreError::Format(e)) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "discarding unreadable session file"
                );
                Ok(Map::new())
            }
            other => other,
        }
    }

    /// Replaces the file through a sibling temp file, so readers never see a
    /// partial write. The temp file is created with mode 0600 on unix.
    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let json = serde_json::to_string_pretty(entries)?;
        let mut file = NamedTempFile::new_in(parent)?;
        file.write_all(json.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

fn remove_file(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
        _ => Ok(()),
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let entries = self.read_entries()?;
        Ok(entries
            .get(ACCESS_TOKEN_KEY)
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(String::from))
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries_or_reset()?;
        entries.insert(ACCESS_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_entries(&entries)
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StoreError::Format(e)) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "removing unreadable session file"
                );
                return remove_file(&self.path);
            }
            Err(e) => return Err(e),
        };
        if entries.remove(ACCESS_TOKEN_KEY).is_none() {
            return Ok(());
        }

        if entries.is_empty() {
            remove_file(&self.path)
        } else {
            self.write_entries(&entries)
        }
    }
}

/// Process-local store. Tokens do not survive a restart.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates a store already holding `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let token = self.token.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(token.clone().filter(|token| !token.is_empty()))
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        let mut slot = self.token.lock().map_err(|_| StoreError::Poisoned)?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self.token.lock().map_err(|_| StoreError::Poisoned)?;
        *slot = None;
        Ok(())
    }
}

impl fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTokenStore").finish_non_exhaustive()
    }
}
