pub mod add_document_type;
pub mod delete_document_type;
pub mod list_document_types;
pub mod update_document_type;
