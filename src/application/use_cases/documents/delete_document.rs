use uuid::Uuid;

use crate::application::ports::document_repository::DocumentRepository;
use crate::domain::documents::document::DocumentStatus;

/// Soft delete: flips the status, keeping metadata and attachment.
pub struct DeleteDocument<'a, R: DocumentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> DeleteDocument<'a, R> {
    // Missing ids are a silent no-op; the bool reports whether one was found.
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<bool> {
        set_status(self.repo, id, DocumentStatus::Deleted).await
    }
}

pub(super) async fn set_status<R: DocumentRepository + ?Sized>(
    repo: &R,
    id: Uuid,
    status: DocumentStatus,
) -> anyhow::Result<bool> {
    let Some(mut doc) = repo.find_by_id(id).await? else {
        tracing::debug!(doc_id = %id, %status, "status_change_skipped_missing");
        return Ok(false);
    };
    doc.status = status;
    repo.save(&doc).await?;
    tracing::info!(doc_id = %id, %status, "document_status_changed");
    Ok(true)
}
