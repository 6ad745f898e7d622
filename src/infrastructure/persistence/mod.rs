mod data_uri;
mod records;

pub mod repositories;

pub use data_uri::{decode_data_uri, encode_data_uri};

/// Storage key holding the document collection.
pub const DOCUMENTS_KEY: &str = "documents";
/// Storage key holding the document type list.
pub const DOCUMENT_TYPES_KEY: &str = "documentTypes";
