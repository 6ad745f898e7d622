pub mod document_type;
