//! JSON-file backend: the whole collection lives in one document.

use std::fs;
use std::path::PathBuf;

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::StorageError;
use crate::record::SavedLogic;
use crate::traits::LogicStore;

/// A [`LogicStore`] persisting all snapshots as a single JSON array
/// document. A missing file reads as an empty collection; the file is
/// created on first save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> JsonFileStore {
        JsonFileStore { path: path.into() }
    }

    fn read_all(&self) -> Result<Vec<SavedLogic>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.path).map_err(backend)?;
        serde_json::from_str(&text).map_err(backend)
    }

    fn write_all(&self, records: &[SavedLogic]) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(records).map_err(backend)?;
        fs::write(&self.path, text).map_err(backend)
    }
}

fn backend(err: impl std::fmt::Display) -> StorageError {
    StorageError::Backend(err.to_string())
}

impl LogicStore for JsonFileStore {
    fn save(&mut self, name: &str, logic: &serde_json::Value) -> Result<SavedLogic, StorageError> {
        let mut records = self.read_all()?;

        let now = OffsetDateTime::now_utc();
        // Millisecond-epoch ids; bump on collision within the same ms.
        let mut millis = now.unix_timestamp_nanos() / 1_000_000;
        while records.iter().any(|r| r.id == millis.to_string()) {
            millis += 1;
        }

        let record = SavedLogic {
            id: millis.to_string(),
            name: name.to_string(),
            logic: logic.clone(),
            saved_at: now.format(&Rfc3339).map_err(backend)?,
        };

        records.push(record.clone());
        self.write_all(&records)?;
        Ok(record)
    }

    fn list(&self) -> Result<Vec<SavedLogic>, StorageError> {
        self.read_all()
    }

    fn load(&self, id: &str) -> Result<SavedLogic, StorageError> {
        self.read_all()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StorageError::NotFound { id: id.to_string() })
    }

    fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(StorageError::NotFound { id: id.to_string() });
        }
        self.write_all(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("saved.json"))
    }

    #[test]
    fn missing_file_lists_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).list().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_the_expression() {
        let dir = TempDir::new().unwrap();
        let mut s = store(&dir);

        let logic = json!({"and": [{"==": [{"var": "user_active"}, true]}]});
        let saved = s.save("actives", &logic).unwrap();
        assert_eq!(saved.name, "actives");
        assert!(!saved.id.is_empty());
        assert!(saved.saved_at.contains('T'));

        let loaded = s.load(&saved.id).unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.logic, logic);
    }

    #[test]
    fn list_preserves_insertion_order_across_reopen() {
        let dir = TempDir::new().unwrap();
        let mut s = store(&dir);
        let a = s.save("first", &json!("a")).unwrap();
        let b = s.save("second", &json!("b")).unwrap();

        let reopened = store(&dir);
        let all = reopened.list().unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[test]
    fn ids_are_unique_within_one_millisecond() {
        let dir = TempDir::new().unwrap();
        let mut s = store(&dir);
        let mut ids: Vec<String> = (0..5)
            .map(|i| s.save(&format!("n{}", i), &json!("x")).unwrap().id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn delete_removes_only_the_addressed_snapshot() {
        let dir = TempDir::new().unwrap();
        let mut s = store(&dir);
        let a = s.save("keep", &json!("a")).unwrap();
        let b = s.save("drop", &json!("b")).unwrap();

        s.delete(&b.id).unwrap();
        let all = s.list().unwrap();
        assert_eq!(all, vec![a]);
    }

    #[test]
    fn load_and_delete_report_not_found() {
        let dir = TempDir::new().unwrap();
        let mut s = store(&dir);
        assert!(matches!(
            s.load("missing"),
            Err(StorageError::NotFound { .. })
        ));
        assert!(matches!(
            s.delete("missing"),
            Err(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn corrupt_file_is_a_backend_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saved.json");
        std::fs::write(&path, "not json").unwrap();
        let s = JsonFileStore::new(path);
        assert!(matches!(s.list(), Err(StorageError::Backend(_))));
    }
}
