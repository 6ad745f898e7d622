use std::env;

use crate::application::services::filtering::PAGE_SIZES;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Filesystem,
    Memory,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: String,
    pub storage_backend: StorageBackend,
    pub upload_max_bytes: usize,
    pub page_size: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("DOCVAULT_DATA_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "./data".into());
        let storage_backend = match lookup("DOCVAULT_STORAGE")
            .map(|s| s.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("") | Some("filesystem") | Some("fs") => StorageBackend::Filesystem,
            Some("memory") | Some("mem") => StorageBackend::Memory,
            Some(other) => anyhow::bail!(
                "DOCVAULT_STORAGE must be `filesystem` or `memory`, got {other:?}"
            ),
        };
        let upload_max_bytes = lookup("UPLOAD_MAX_BYTES")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(5 * 1024 * 1024);
        let page_size = lookup("DOCVAULT_PAGE_SIZE")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|n| PAGE_SIZES.contains(n))
            .unwrap_or(10);

        Ok(Self {
            data_dir,
            storage_backend,
            upload_max_bytes,
            page_size,
        })
    }
}
