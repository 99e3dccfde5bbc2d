/// All errors that can be returned by a LogicStore implementation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No snapshot with the given id.
    #[error("snapshot not found: {id}")]
    NotFound { id: String },

    /// A backend-specific storage error (I/O, serialization, etc.).
    #[error("storage backend error: {0}")]
    Backend(String),
}
