use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle tag of a document. Deletion is logical: a deleted document keeps
/// its metadata and attachment and can be reactivated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Active,
    Deleted,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Active => "active",
            DocumentStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(DocumentStatus::Active),
            "deleted" => Ok(DocumentStatus::Deleted),
            other => anyhow::bail!("unknown document status: {other}"),
        }
    }
}

/// Uploaded file kept inline with the document.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

// Payloads can be megabytes; print the size instead of the bytes.
impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub document_type_id: Uuid,
    pub creation_date: NaiveDate,
    pub attachment: Attachment,
    pub description: String,
    pub status: DocumentStatus,
}

impl Document {
    pub fn is_deleted(&self) -> bool {
        self.status == DocumentStatus::Deleted
    }
}

/// Create payload: a document before it has an identity or a status.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub name: String,
    pub document_type_id: Uuid,
    pub creation_date: Option<NaiveDate>,
    pub attachment: Attachment,
    pub description: String,
}

/// Creation dates are shown as day/month/year.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
