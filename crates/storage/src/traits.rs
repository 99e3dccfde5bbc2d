use crate::error::StorageError;
use crate::record::SavedLogic;

/// Storage boundary for saved expressions.
///
/// Implementations persist whole [`SavedLogic`] records keyed by their
/// generated id. Single-user editing sessions, so the trait is
/// synchronous.
pub trait LogicStore {
    /// Persist an expression under a display name, returning the stored
    /// record with its generated id and timestamp.
    fn save(&mut self, name: &str, logic: &serde_json::Value) -> Result<SavedLogic, StorageError>;

    /// All snapshots in insertion order.
    fn list(&self) -> Result<Vec<SavedLogic>, StorageError>;

    /// Fetch one snapshot by id.
    fn load(&self, id: &str) -> Result<SavedLogic, StorageError>;

    /// Remove one snapshot by id.
    fn delete(&mut self, id: &str) -> Result<(), StorageError>;
}
