use uuid::Uuid;

use crate::application::ports::document_repository::DocumentRepository;
use crate::domain::documents::document::{Document, DocumentStatus, NewDocument};

pub struct CreateDocument<'a, R: DocumentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> CreateDocument<'a, R> {
    /// Assigns identity, creation date (today, UTC, unless supplied) and the
    /// active status, then persists. Input is trusted as already validated.
    pub async fn execute(&self, input: NewDocument) -> anyhow::Result<Document> {
        let doc = Document {
            id: Uuid::new_v4(),
            name: input.name,
            document_type_id: input.document_type_id,
            creation_date: input
                .creation_date
                .unwrap_or_else(|| chrono::Utc::now().date_naive()),
            attachment: input.attachment,
            description: input.description,
            status: DocumentStatus::Active,
        };
        self.repo.save(&doc).await?;
        tracing::info!(doc_id = %doc.id, size = doc.attachment.size(), "document_created");
        Ok(doc)
    }
}
