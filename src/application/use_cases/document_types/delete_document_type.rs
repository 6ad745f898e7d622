use uuid::Uuid;

use crate::application::ports::document_type_repository::DocumentTypeRepository;

pub struct DeleteDocumentType<'a, R: DocumentTypeRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentTypeRepository + ?Sized> DeleteDocumentType<'a, R> {
    // Documents referencing the type are left alone; they resolve to the
    // unknown-type name afterwards.
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<bool> {
        let removed = self.repo.delete(id).await?;
        if removed {
            tracing::info!(type_id = %id, "document_type_deleted");
        }
        Ok(removed)
    }
}
