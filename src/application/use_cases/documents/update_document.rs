use crate::application::ports::document_repository::DocumentRepository;
use crate::domain::documents::document::Document;

pub struct UpdateDocument<'a, R: DocumentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DocumentRepository + ?Sized> UpdateDocument<'a, R> {
    /// Overwrites the stored record with `document` as given: no field merge,
    /// status untouched. Returns `None` and writes nothing when the id is not
    /// already stored; updates never create documents.
    pub async fn execute(&self, document: Document) -> anyhow::Result<Option<Document>> {
        if self.repo.find_by_id(document.id).await?.is_none() {
            tracing::warn!(doc_id = %document.id, "update_document_missing");
            return Ok(None);
        }
        self.repo.save(&document).await?;
        tracing::info!(doc_id = %document.id, "document_updated");
        Ok(Some(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::documents::create_document::CreateDocument;
    use crate::application::use_cases::documents::test_support::{memory_repo, new_document};
    use crate::domain::documents::document::Attachment;
    use uuid::Uuid;

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let repo = memory_repo();
        let created = CreateDocument { repo: &repo }
            .execute(new_document("Old"))
            .await
            .unwrap();

        let replacement = Document {
            name: "New".into(),
            description: String::new(),
            attachment: Attachment {
                file_name: "new.png".into(),
                mime_type: "image/png".into(),
                bytes: vec![7, 7, 7],
            },
            ..created.clone()
        };
        let out = UpdateDocument { repo: &repo }
            .execute(replacement.clone())
            .await
            .unwrap();
        assert_eq!(out, Some(replacement.clone()));

        let all = repo.get_all().await.unwrap();
        assert_eq!(all, vec![replacement]);
        assert!(all.iter().all(|d| d.name != "Old"));
    }

    #[tokio::test]
    async fn update_of_unknown_id_writes_nothing() {
        let repo = memory_repo();
        let created = CreateDocument { repo: &repo }
            .execute(new_document("Existing"))
            .await
            .unwrap();
        let stranger = Document {
            id: Uuid::new_v4(),
            ..created
        };

        let out = UpdateDocument { repo: &repo }.execute(stranger).await.unwrap();
        assert!(out.is_none());
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }
}
