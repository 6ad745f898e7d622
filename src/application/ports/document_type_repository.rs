use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::document_types::document_type::DocumentType;

#[async_trait]
pub trait DocumentTypeRepository: Send + Sync {
    async fn save(&self, document_type: &DocumentType) -> anyhow::Result<()>;

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<DocumentType>>;

    async fn get_all(&self) -> anyhow::Result<Vec<DocumentType>>;

    // Returns false if no type had this id.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
