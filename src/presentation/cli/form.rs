use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::application::ports::document_type_repository::DocumentTypeRepository;
use crate::domain::documents::document::{Attachment, NewDocument};

static ACCEPTED_FILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(pdf|jpe?g|png)$").expect("valid regex"));

/// Input checks done before any use-case runs. The core trusts its input.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("unknown document type {0}")]
    UnknownType(Uuid),
    #[error("unsupported file {0:?}: attach a .pdf, .jpg or .png file")]
    UnsupportedFile(String),
    #[error("file is {size} bytes, the limit is {limit}")]
    TooLarge { size: u64, limit: usize },
}

pub fn require(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed.to_string())
}

pub fn check_file_name(file_name: &str) -> Result<(), ValidationError> {
    if ACCEPTED_FILE_RE.is_match(file_name) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFile(file_name.to_string()))
    }
}

pub async fn ensure_type_exists<R: DocumentTypeRepository + ?Sized>(
    repo: &R,
    id: Uuid,
) -> anyhow::Result<()> {
    if repo.find_by_id(id).await?.is_none() {
        return Err(ValidationError::UnknownType(id).into());
    }
    Ok(())
}

/// Loads an upload from disk, checking extension and size before reading.
pub async fn read_attachment(path: &Path, limit: usize) -> anyhow::Result<Attachment> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    check_file_name(&file_name)?;

    let meta = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("stat {}", path.display()))?;
    if meta.len() > limit as u64 {
        return Err(ValidationError::TooLarge {
            size: meta.len(),
            limit,
        }
        .into());
    }
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    Ok(Attachment {
        file_name,
        mime_type,
        bytes,
    })
}

/// Fields of the upload form, before identity and status exist.
pub struct DocumentForm {
    pub name: String,
    pub document_type_id: Uuid,
    pub description: String,
    pub creation_date: Option<NaiveDate>,
}

impl DocumentForm {
    pub fn into_new_document(self, attachment: Attachment) -> Result<NewDocument, ValidationError> {
        if attachment.is_empty() {
            return Err(ValidationError::Required("file"));
        }
        Ok(NewDocument {
            name: require("name", &self.name)?,
            document_type_id: self.document_type_id,
            creation_date: self.creation_date,
            attachment,
            description: require("description", &self.description)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    use crate::application::use_cases::document_types::add_document_type::AddDocumentType;
    use crate::infrastructure::persistence::repositories::document_type_repository_kv::KvDocumentTypeRepository;
    use crate::infrastructure::storage::InMemoryKeyValueStore;

    #[test]
    fn accepts_pdf_and_images_only() {
        assert!(check_file_name("scan.PDF").is_ok());
        assert!(check_file_name("photo.jpeg").is_ok());
        assert!(check_file_name("photo.jpg").is_ok());
        assert!(check_file_name("logo.png").is_ok());
        assert_eq!(
            check_file_name("notes.txt"),
            Err(ValidationError::UnsupportedFile("notes.txt".into()))
        );
        assert!(check_file_name("pdf").is_err());
    }

    #[test]
    fn required_fields_must_not_be_blank() {
        assert_eq!(require("name", "  Lease "), Ok("Lease".to_string()));
        assert_eq!(require("name", "   "), Err(ValidationError::Required("name")));
    }

    #[test]
    fn form_needs_a_file_with_content() {
        let form = DocumentForm {
            name: "Lease".into(),
            document_type_id: Uuid::new_v4(),
            description: "flat".into(),
            creation_date: None,
        };
        let empty = Attachment {
            file_name: "lease.pdf".into(),
            mime_type: "application/pdf".into(),
            bytes: Vec::new(),
        };
        assert_eq!(
            form.into_new_document(empty).unwrap_err(),
            ValidationError::Required("file")
        );
    }

    #[tokio::test]
    async fn reads_attachment_with_guessed_mime() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scan.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let attachment = read_attachment(&path, 1024).await.unwrap();
        assert_eq!(attachment.file_name, "scan.png");
        assert_eq!(attachment.mime_type, "image/png");
        assert_eq!(attachment.size(), 4);
    }

    #[tokio::test]
    async fn oversized_upload_is_rejected_before_reading() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("big.pdf");
        std::fs::write(&path, vec![0u8; 32]).unwrap();

        let err = read_attachment(&path, 16).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::TooLarge { size: 32, limit: 16 })
        );
    }

    #[tokio::test]
    async fn type_must_exist() {
        let repo = KvDocumentTypeRepository::new(Arc::new(InMemoryKeyValueStore::new()));
        let ty = AddDocumentType { repo: &repo }.execute("Invoice").await.unwrap();
        assert!(ensure_type_exists(&repo, ty.id).await.is_ok());

        let missing = Uuid::new_v4();
        let err = ensure_type_exists(&repo, missing).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::UnknownType(missing))
        );
    }
}
