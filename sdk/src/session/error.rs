//! Token store error types.

/// Token store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the store failed.
    #[error("token store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The store file is not a JSON object.
    #[error("token store is corrupt: {0}")]
    Format(#[from] serde_json::Error),

    /// No platform data directory to place the default store in.
    #[error("cannot determine the local data directory")]
    NoDataDir,

    /// A previous holder of the store lock panicked.
    #[error("token store lock poisoned")]
    Poisoned,

    /// The blocking task running a store operation did not complete.
    #[error("token store task failed: {0}")]
    Task(String),
}
