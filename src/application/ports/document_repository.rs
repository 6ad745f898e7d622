use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::documents::document::Document;

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    // Upsert by id: inserts when absent, otherwise overwrites the whole record.
    async fn save(&self, document: &Document) -> anyhow::Result<()>;

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Document>>;

    // Every record regardless of status, in insertion order.
    async fn get_all(&self) -> anyhow::Result<Vec<Document>>;
}
