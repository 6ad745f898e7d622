pub mod document_repository;
pub mod document_type_repository;
pub mod key_value_store;
