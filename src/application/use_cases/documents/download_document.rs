use uuid::Uuid;

use crate::application::ports::document_repository::DocumentRepository;

pub struct DocumentDownload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub struct DownloadDocument<'a, R: DocumentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> DownloadDocument<'a, R> {
    /// Deleted documents stay downloadable. `None` when the document is
    /// missing or carries no file content.
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<DocumentDownload>> {
        let Some(doc) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        if doc.attachment.is_empty() {
            tracing::info!(doc_id = %id, "download_without_attachment");
            return Ok(None);
        }
        let filename = if doc.attachment.file_name.trim().is_empty() {
            sanitize_filename(&doc.name)
        } else {
            sanitize_filename(&doc.attachment.file_name)
        };
        let content_type = if doc.attachment.mime_type.trim().is_empty() {
            "application/octet-stream".to_string()
        } else {
            doc.attachment.mime_type
        };
        Ok(Some(DocumentDownload {
            filename,
            content_type,
            bytes: doc.attachment.bytes,
        }))
    }
}

const MAX_FILENAME_CHARS: usize = 100;

/// Reduces a stored name to a single path component.
fn sanitize_filename(name: &str) -> String {
    let invalid = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if invalid.contains(&c) || c.is_control() { '-' } else { c })
        .take(MAX_FILENAME_CHARS)
        .collect();
    match cleaned.as_str() {
        "" | "." | ".." => "document".into(),
        _ => cleaned,
    }
}
