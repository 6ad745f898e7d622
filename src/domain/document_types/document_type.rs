use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display name used when a document references a type that no longer exists.
pub const UNKNOWN_TYPE_NAME: &str = "Unknown type";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentType {
    pub id: Uuid,
    pub name: String,
}

pub fn resolve_type_name(types: &[DocumentType], id: Uuid) -> &str {
    types
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.name.as_str())
        .unwrap_or(UNKNOWN_TYPE_NAME)
}
