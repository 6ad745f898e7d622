pub mod document_types;
pub mod documents;
