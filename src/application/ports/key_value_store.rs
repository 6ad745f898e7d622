use async_trait::async_trait;

/// Persistence failures raised by key-value adapters. Repositories pass them
/// through untouched; nothing retries.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage quota exceeded: {needed} bytes needed, quota is {quota}")]
    QuotaExceeded { needed: usize, quota: usize },
    #[error("storage i/o failure")]
    Io(#[source] std::io::Error),
    #[error("stored value could not be (de)serialized")]
    Serialization(#[source] anyhow::Error),
}

/// Durable string-keyed medium holding whole serialized collections.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    // Replaces the whole value; no partial write is ever observable.
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}
