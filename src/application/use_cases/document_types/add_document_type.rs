use uuid::Uuid;

use crate::application::ports::document_type_repository::DocumentTypeRepository;
use crate::domain::document_types::document_type::DocumentType;

pub struct AddDocumentType<'a, R: DocumentTypeRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentTypeRepository + ?Sized> AddDocumentType<'a, R> {
    pub async fn execute(&self, name: &str) -> anyhow::Result<DocumentType> {
        let document_type = DocumentType {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
        };
        self.repo.save(&document_type).await?;
        tracing::info!(
            type_id = %document_type.id,
            name = %document_type.name,
            "document_type_added"
        );
        Ok(document_type)
    }
}
