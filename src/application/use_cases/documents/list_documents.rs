use crate::application::ports::document_repository::DocumentRepository;
use crate::application::ports::document_type_repository::DocumentTypeRepository;
use crate::application::services::filtering::{
    DocumentQuery, Page, PageRequest, SortOrder, filter_documents, paginate, sort_documents,
};
use crate::domain::document_types::document_type::DocumentType;
use crate::domain::documents::document::Document;

pub struct DocumentListing {
    pub page: Page<Document>,
    /// Type list used to resolve names, handed back for rendering.
    pub types: Vec<DocumentType>,
}

pub struct ListDocuments<'a, D, T>
where
    D: DocumentRepository + ?Sized,
    T: DocumentTypeRepository + ?Sized,
{
    pub documents: &'a D,
    pub types: &'a T,
}

impl<'a, D, T> ListDocuments<'a, D, T>
where
    D: DocumentRepository + ?Sized,
    T: DocumentTypeRepository + ?Sized,
{
    /// Reloads the whole collection, then filters, sorts and pages it in
    /// memory.
    pub async fn execute(
        &self,
        query: &DocumentQuery,
        order: Option<SortOrder>,
        page: PageRequest,
    ) -> anyhow::Result<DocumentListing> {
        let all = self.documents.get_all().await?;
        let types = self.types.get_all().await?;
        let mut matched = filter_documents(&all, &types, query);
        if let Some(order) = order {
            sort_documents(&mut matched, &types, order);
        }
        tracing::debug!(total = all.len(), matched = matched.len(), "documents_listed");
        Ok(DocumentListing {
            page: paginate(matched, page),
            types,
        })
    }
}
