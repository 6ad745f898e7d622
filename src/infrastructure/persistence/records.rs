use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::data_uri::{decode_data_uri, encode_data_uri};
use crate::application::ports::key_value_store::StorageError;
use crate::domain::documents::document::{Attachment, Document, DocumentStatus};

/// Persisted shape of a document: camelCase fields with the file inlined as
/// a data URI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentRecord {
    pub id: Uuid,
    pub name: String,
    pub document_type_id: Uuid,
    pub creation_date: NaiveDate,
    #[serde(default)]
    pub file_content: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub description: String,
    pub status: DocumentStatus,
}

impl From<&Document> for DocumentRecord {
    fn from(doc: &Document) -> Self {
        DocumentRecord {
            id: doc.id,
            name: doc.name.clone(),
            document_type_id: doc.document_type_id,
            creation_date: doc.creation_date,
            file_content: encode_data_uri(&doc.attachment.mime_type, &doc.attachment.bytes),
            file_name: doc.attachment.file_name.clone(),
            file_type: doc.attachment.mime_type.clone(),
            description: doc.description.clone(),
            status: doc.status,
        }
    }
}

impl TryFrom<DocumentRecord> for Document {
    type Error = StorageError;

    fn try_from(rec: DocumentRecord) -> Result<Self, Self::Error> {
        let (declared, bytes) = decode_data_uri(&rec.file_content)
            .map_err(|e| StorageError::Serialization(e.context(format!("document {}", rec.id))))?;
        // fileType wins; the data uri header only fills a blank one.
        let mime_type = if rec.file_type.trim().is_empty() {
            declared
        } else {
            rec.file_type
        };
        Ok(Document {
            id: rec.id,
            name: rec.name,
            document_type_id: rec.document_type_id,
            creation_date: rec.creation_date,
            attachment: Attachment {
                file_name: rec.file_name,
                mime_type,
                bytes,
            },
            description: rec.description,
            status: rec.status,
        })
    }
}

pub(crate) fn parse_collection<T: for<'de> Deserialize<'de>>(
    raw: Option<String>,
) -> Result<Vec<T>, StorageError> {
    match raw {
        None => Ok(Vec::new()),
        Some(s) if s.trim().is_empty() => Ok(Vec::new()),
        Some(s) => serde_json::from_str(&s).map_err(|e| StorageError::Serialization(e.into())),
    }
}

pub(crate) fn render_collection<T: Serialize>(items: &[T]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(|e| StorageError::Serialization(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document {
            id: Uuid::new_v4(),
            name: "Contract".into(),
            document_type_id: Uuid::new_v4(),
            creation_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            attachment: Attachment {
                file_name: "contract.pdf".into(),
                mime_type: "application/pdf".into(),
                bytes: b"%PDF-1.7 body".to_vec(),
            },
            description: "signed copy".into(),
            status: DocumentStatus::Active,
        }
    }

    #[test]
    fn record_uses_camel_case_layout() {
        let doc = sample();
        let json = serde_json::to_value(DocumentRecord::from(&doc)).unwrap();
        assert_eq!(json["documentTypeId"], doc.document_type_id.to_string());
        assert_eq!(json["creationDate"], "2024-01-01");
        assert_eq!(json["fileName"], "contract.pdf");
        assert_eq!(json["fileType"], "application/pdf");
        assert_eq!(json["status"], "active");
        assert!(
            json["fileContent"]
                .as_str()
                .unwrap()
                .starts_with("data:application/pdf;base64,")
        );
    }

    #[test]
    fn record_converts_back_to_the_same_document() {
        let doc = sample();
        let back = Document::try_from(DocumentRecord::from(&doc)).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn corrupt_file_content_is_a_serialization_error() {
        let mut rec = DocumentRecord::from(&sample());
        rec.file_content = "not a data uri".into();
        assert!(matches!(
            Document::try_from(rec),
            Err(StorageError::Serialization(_))
        ));
    }
}
