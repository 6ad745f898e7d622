use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::document_repository::DocumentRepository;
use crate::application::ports::key_value_store::KeyValueStore;
use crate::domain::documents::document::Document;
use crate::infrastructure::persistence::DOCUMENTS_KEY;
use crate::infrastructure::persistence::records::{
    DocumentRecord, parse_collection, render_collection,
};

/// Keeps the whole document collection as one JSON array under a single key.
pub struct KvDocumentRepository {
    pub store: Arc<dyn KeyValueStore>,
}

impl KvDocumentRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn load_records(&self) -> anyhow::Result<Vec<DocumentRecord>> {
        let raw = self.store.get(DOCUMENTS_KEY).await?;
        Ok(parse_collection(raw)?)
    }
}

#[async_trait]
impl DocumentRepository for KvDocumentRepository {
    async fn save(&self, document: &Document) -> anyhow::Result<()> {
        let mut records = self.load_records().await?;
        let record = DocumentRecord::from(document);
        match records.iter_mut().find(|r| r.id == document.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        let serialized = render_collection(&records)?;
        self.store
            .set(DOCUMENTS_KEY, &serialized)
            .await
            .with_context(|| format!("save document {}", document.id))
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Document>> {
        let records = self.load_records().await?;
        match records.into_iter().find(|r| r.id == id) {
            Some(rec) => Ok(Some(Document::try_from(rec)?)),
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Document>> {
        let records = self.load_records().await?;
        let docs = records
            .into_iter()
            .map(Document::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(docs)
    }
}
