use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::storage::{StorageError, StorageMedium};

/// Process-local map. Lost on restart.
#[derive(Default)]
pub struct MemoryMedium {
    entries: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl StorageMedium for MemoryMedium {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

/// One JSON file per key under `root`. Writes go through a temp file and a
/// rename so a crash never leaves a half-written value behind.
pub struct FileMedium {
    root: PathBuf,
}

impl FileMedium {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

#[async_trait]
impl StorageMedium for FileMedium {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: &str, value: String) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_read_missing_is_none() {
        let medium = MemoryMedium::default();
        assert!(medium.read("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_write_then_read() {
        let medium = MemoryMedium::default();
        medium.write("k", "v1".to_string()).await.unwrap();
        medium.write("k", "v2".to_string()).await.unwrap();
        assert_eq!(medium.read("k").await.unwrap().as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn test_file_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let medium = FileMedium::new(dir.path().join("store"));
        assert!(medium.read("campaign_candidates").await.unwrap().is_none());

        medium
            .write("campaign_candidates", r#"{"c1":[]}"#.to_string())
            .await
            .unwrap();
        assert_eq!(
            medium.read("campaign_candidates").await.unwrap().as_deref(),
            Some(r#"{"c1":[]}"#)
        );
        assert!(dir.path().join("store/campaign_candidates.json").exists());
        assert!(!dir.path().join("store/campaign_candidates.json.tmp").exists());
    }

    #[test]
    fn test_file_keys_are_sanitized() {
        let medium = FileMedium::new("/tmp/x");
        let path = medium.path_for("../etc/passwd");
        assert_eq!(path, PathBuf::from("/tmp/x/___etc_passwd.json"));
    }
}
