use dashmap::DashMap;
use std::io::{ErrorKind, Write};
use tempfile::NamedTempFile;
use std::path::{Path, PathBuf};
use vidprompt_errors::AppError;

/// Minimal string store behind draft persistence.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside `dir`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            AppError::Storage(format!("Cannot create {}: {}", dir.display(), e))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!("Cannot read {}: {}", key, e))),
        }
    }

    /// Each write goes to its own temp file in `dir` before being renamed
    /// over the record, so concurrent writers never share a partial file.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage_err = |e: std::io::Error| AppError::Storage(format!("Cannot write {}: {}", key, e));

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(storage_err)?;
        tmp.write_all(value.as_bytes()).map_err(storage_err)?;
        tmp.persist(self.path_for(key))
            .map_err(|e| storage_err(e.error))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!("Cannot remove {}: {}", key, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(store: &dyn KeyValueStore) {
        assert_eq!(store.get("veo3_workspace").unwrap(), None);

        store.set("veo3_workspace", "{\"a\":1}").unwrap();
        assert_eq!(store.get("veo3_workspace").unwrap().as_deref(), Some("{\"a\":1}"));

        store.set("veo3_workspace", "{}").unwrap();
        assert_eq!(store.get("veo3_workspace").unwrap().as_deref(), Some("{}"));

        store.remove("veo3_workspace").unwrap();
        assert_eq!(store.get("veo3_workspace").unwrap(), None);
        store.remove("veo3_workspace").unwrap();
    }

    #[test]
    fn test_memory_store() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn test_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("drafts")).unwrap();
        exercise(&store);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::new(dir.path()).unwrap().set("k", "v").unwrap();
        let reopened = FileStore::new(dir.path()).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_concurrent_writes_stay_whole() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(FileStore::new(dir.path()).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|writer| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for round in 0..100 {
                        let record = serde_json::json!({
                            "productName": format!("writer {} round {}", writer, round),
                            "features": "x".repeat(20_000),
                        });
                        store.set("veo3_workspace", &record.to_string()).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stored = store.get("veo3_workspace").unwrap().unwrap();
        let record: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(record["features"].as_str().unwrap().len(), 20_000);

        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_file_store_keys_cannot_escape_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        store.set("../escape", "x").unwrap();
        assert!(store.dir().join("___escape.json").exists());
    }
}
