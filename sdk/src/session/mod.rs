//! Session and token persistence.
//!
//! A [`Session`] is the single credential slot of a logical client session.
//! It mirrors its token into a [`TokenStore`] so the login survives process
//! restarts.
//!
//! # Components
//!
//! - [`Session`]: synchronized in-memory token holder
//! - [`FileTokenStore`]: JSON key-value file on local disk
//! - [`MemoryTokenStore`]: process-local store

pub mod error;
pub mod store;

use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

pub use error::StoreError;
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY};

/// Whether a session currently holds a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No token; requests go out without `Authorization`.
    Anonymous,
    /// A token is held and attached to every request.
    Authenticated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => write!(f, "anonymous"),
            Self::Authenticated => write!(f, "authenticated"),
        }
    }
}

/// Synchronized bearer-token holder backed by a [`TokenStore`].
///
/// Readers take a snapshot of the token. A new token reaches the store before
/// the in-memory slot, so a failed save leaves the session unchanged.
pub struct Session {
    token: RwLock<Option<String>>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Opens a session, loading any token already in `store`.
    ///
    /// An unparsable store is treated as empty, so the session starts
    /// anonymous and a later login or logout rewrites it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn open(store: Arc<dyn TokenStore>) -> Result<Self, StoreError> {
        let token = match store.load() {
            Ok(token) => token,
            Err(StoreError::Format(e)) => {
                warn!(error = %e, "ignoring unreadable session store");
                None
            }
            Err(e) => return Err(e),
        };
        debug!(restored = token.is_some(), "session opened");

        Ok(Self {
            token: RwLock::new(token),
            store,
        })
    }

    /// Returns a copy of the current token.
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Returns the current state.
    pub async fn state(&self) -> SessionState {
        if self.token.read().await.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    /// Persists `token` and makes it current.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written; the previous token
    /// stays current.
    pub async fn set_token(&self, token: String) -> Result<(), StoreError> {
        let mut slot = self.token.write().await;
        let persisted = token.clone();
        self.with_store(move |store| store.save(&persisted)).await?;
        *slot = Some(token);
        Ok(())
    }

    /// Drops the current token and its persisted copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted copy cannot be removed. The
    /// in-memory token is dropped regardless.
    pub async fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self.token.write().await;
        *slot = None;
        self.with_store(|store| store.clear()).await
    }

    /// Runs a store operation on the blocking pool.
    async fn with_store<F>(&self, op: F) -> Result<(), StoreError>
    where
        F: FnOnce(&dyn TokenStore) -> Result<(), StoreError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || op(&*store))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
