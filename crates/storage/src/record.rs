use serde::{Deserialize, Serialize};

/// A named snapshot of a portable expression as stored in the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLogic {
    /// Backend-generated identifier.
    pub id: String,
    /// User-chosen display name.
    pub name: String,
    /// The portable expression, stored verbatim.
    pub logic: serde_json::Value,
    /// ISO 8601 / RFC 3339 timestamp string.
    pub saved_at: String,
}
