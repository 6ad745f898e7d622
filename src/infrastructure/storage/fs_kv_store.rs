use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::application::ports::key_value_store::{KeyValueStore, StorageError};

static KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid regex"));

/// Key-value store keeping one `<key>.json` file per key under a data
/// directory. Writes land in a hidden sibling file first and are renamed over
/// the target, so readers see either the old or the new value.
pub struct FsKeyValueStore {
    root: PathBuf,
}

impl FsKeyValueStore {
    pub async fn open(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(StorageError::Io)
            .with_context(|| format!("create data dir {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> anyhow::Result<PathBuf> {
        if !KEY_RE.is_match(key) {
            bail!("invalid storage key: {key:?}");
        }
        Ok(self.root.join(format!("{key}.json")))
    }

    fn staging_path(&self, key: &str) -> PathBuf {
        self.root.join(format!(".{key}.json.tmp"))
    }
}

#[async_trait]
impl KeyValueStore for FsKeyValueStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.key_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err))
                .with_context(|| format!("read {}", path.display())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.key_path(key)?;
        let staging = self.staging_path(key);
        tokio::fs::write(&staging, value.as_bytes())
            .await
            .map_err(StorageError::Io)
            .with_context(|| format!("write {}", staging.display()))?;
        if let Err(err) = tokio::fs::rename(&staging, &path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(StorageError::Io(err))
                .with_context(|| format!("replace {}", path.display()));
        }
        tracing::debug!(key, bytes = value.len(), "kv_set");
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let path = self.key_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io(err))
                .with_context(|| format!("remove {}", path.display())),
        }
    }
}
