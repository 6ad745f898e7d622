pub mod document_repository_kv;
pub mod document_type_repository_kv;
