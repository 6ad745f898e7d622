use uuid::Uuid;

use super::delete_document::set_status;
use crate::application::ports::document_repository::DocumentRepository;
use crate::domain::documents::document::DocumentStatus;

pub struct ReactivateDocument<'a, R: DocumentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> ReactivateDocument<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<bool> {
        set_status(self.repo, id, DocumentStatus::Active).await
    }
}
