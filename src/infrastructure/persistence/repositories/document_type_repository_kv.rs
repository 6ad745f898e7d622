use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::document_type_repository::DocumentTypeRepository;
use crate::application::ports::key_value_store::KeyValueStore;
use crate::domain::document_types::document_type::DocumentType;
use crate::infrastructure::persistence::DOCUMENT_TYPES_KEY;
use crate::infrastructure::persistence::records::{parse_collection, render_collection};

pub struct KvDocumentTypeRepository {
    pub store: Arc<dyn KeyValueStore>,
}

impl KvDocumentTypeRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn load(&self) -> anyhow::Result<Vec<DocumentType>> {
        let raw = self.store.get(DOCUMENT_TYPES_KEY).await?;
        Ok(parse_collection(raw)?)
    }

    async fn store_all(&self, types: &[DocumentType]) -> anyhow::Result<()> {
        let serialized = render_collection(types)?;
        self.store
            .set(DOCUMENT_TYPES_KEY, &serialized)
            .await
            .context("save document types")
    }
}

#[async_trait]
impl DocumentTypeRepository for KvDocumentTypeRepository {
    async fn save(&self, document_type: &DocumentType) -> anyhow::Result<()> {
        let mut types = self.load().await?;
        match types.iter_mut().find(|t| t.id == document_type.id) {
            Some(existing) => *existing = document_type.clone(),
            None => types.push(document_type.clone()),
        }
        self.store_all(&types).await
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<DocumentType>> {
        Ok(self.load().await?.into_iter().find(|t| t.id == id))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<DocumentType>> {
        self.load().await
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut types = self.load().await?;
        let before = types.len();
        types.retain(|t| t.id != id);
        if types.len() == before {
            return Ok(false);
        }
        self.store_all(&types).await?;
        Ok(true)
    }
}
