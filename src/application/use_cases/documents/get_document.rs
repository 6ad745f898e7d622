use uuid::Uuid;

use crate::application::ports::document_repository::DocumentRepository;
use crate::domain::documents::document::Document;

pub struct GetDocument<'a, R: DocumentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> GetDocument<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<Document>> {
        self.repo.find_by_id(id).await
    }
}
