use crate::application::ports::document_type_repository::DocumentTypeRepository;
use crate::domain::document_types::document_type::DocumentType;

pub struct ListDocumentTypes<'a, R: DocumentTypeRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentTypeRepository + ?Sized> ListDocumentTypes<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<DocumentType>> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::document_repository::DocumentRepository;
    use crate::application::use_cases::document_types::add_document_type::AddDocumentType;
    use crate::application::use_cases::document_types::delete_document_type::DeleteDocumentType;
    use crate::application::use_cases::document_types::update_document_type::UpdateDocumentType;
    use crate::application::use_cases::documents::create_document::CreateDocument;
    use crate::application::use_cases::documents::test_support::{
        memory_repo, memory_type_repo, new_document,
    };
    use crate::domain::document_types::document_type::{UNKNOWN_TYPE_NAME, resolve_type_name};
    use uuid::Uuid;

    #[tokio::test]
    async fn type_lifecycle() {
        let repo = memory_type_repo();
        let added = AddDocumentType { repo: &repo }
            .execute("  Invoice ")
            .await
            .unwrap();
        assert_eq!(added.name, "Invoice");

        let renamed = UpdateDocumentType { repo: &repo }
            .execute(added.id, "Tax invoice")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.id, added.id);

        let missing = UpdateDocumentType { repo: &repo }
            .execute(Uuid::new_v4(), "Ghost")
            .await
            .unwrap();
        assert!(missing.is_none());

        let listed = ListDocumentTypes { repo: &repo }.execute().await.unwrap();
        assert_eq!(listed, vec![renamed]);

        assert!(DeleteDocumentType { repo: &repo }.execute(added.id).await.unwrap());
        assert!(!DeleteDocumentType { repo: &repo }.execute(added.id).await.unwrap());
        assert!(ListDocumentTypes { repo: &repo }.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_a_referenced_type_leaves_documents_resolvable() {
        let types = memory_type_repo();
        let docs = memory_repo();
        let contract = AddDocumentType { repo: &types }
            .execute("Contract")
            .await
            .unwrap();
        let mut input = new_document("Lease");
        input.document_type_id = contract.id;
        let doc = CreateDocument { repo: &docs }.execute(input).await.unwrap();

        DeleteDocumentType { repo: &types }
            .execute(contract.id)
            .await
            .unwrap();

        let remaining = ListDocumentTypes { repo: &types }.execute().await.unwrap();
        assert_eq!(
            resolve_type_name(&remaining, doc.document_type_id),
            UNKNOWN_TYPE_NAME
        );
        assert_eq!(docs.get_all().await.unwrap(), vec![doc]);
    }
}
