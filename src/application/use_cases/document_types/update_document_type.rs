use uuid::Uuid;

use crate::application::ports::document_type_repository::DocumentTypeRepository;
use crate::domain::document_types::document_type::DocumentType;

pub struct UpdateDocumentType<'a, R: DocumentTypeRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentTypeRepository + ?Sized> UpdateDocumentType<'a, R> {
    /// Renames an existing type; `None` when the id is unknown.
    pub async fn execute(&self, id: Uuid, name: &str) -> anyhow::Result<Option<DocumentType>> {
        let Some(mut document_type) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        document_type.name = name.trim().to_string();
        self.repo.save(&document_type).await?;
        tracing::info!(type_id = %id, name = %document_type.name, "document_type_renamed");
        Ok(Some(document_type))
    }
}
