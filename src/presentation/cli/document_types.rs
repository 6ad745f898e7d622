use anyhow::bail;

use crate::application::use_cases::document_types::add_document_type::AddDocumentType;
use crate::application::use_cases::document_types::delete_document_type::DeleteDocumentType;
use crate::application::use_cases::document_types::list_document_types::ListDocumentTypes;
use crate::application::use_cases::document_types::update_document_type::UpdateDocumentType;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::cli::TypesCommand;
use crate::presentation::cli::form;
use crate::presentation::cli::render::{self, NoticeKind};

pub async fn run(ctx: &AppContext, command: TypesCommand) -> anyhow::Result<()> {
    let repo = ctx.document_type_repo();
    match command {
        TypesCommand::List => {
            let types = ListDocumentTypes {
                repo: repo.as_ref(),
            }
            .execute()
            .await?;
            println!("{}", render::type_table(&types));
        }
        TypesCommand::Add { name } => {
            let name = form::require("name", &name)?;
            let added = AddDocumentType {
                repo: repo.as_ref(),
            }
            .execute(&name)
            .await?;
            println!("{}", added.id);
            render::notify(NoticeKind::Success, format!("type {:?} added", added.name));
        }
        TypesCommand::Rename { id, name } => {
            let name = form::require("name", &name)?;
            let uc = UpdateDocumentType {
                repo: repo.as_ref(),
            };
            match uc.execute(id, &name).await? {
                Some(t) => render::notify(
                    NoticeKind::Success,
                    format!("type {id} renamed to {:?}", t.name),
                ),
                None => bail!("no document type with id {id}"),
            }
        }
        TypesCommand::Remove { id } => {
            let uc = DeleteDocumentType {
                repo: repo.as_ref(),
            };
            if uc.execute(id).await? {
                render::notify(NoticeKind::Success, format!("type {id} removed"));
                render::notify(
                    NoticeKind::Info,
                    "documents of this type now show as an unknown type",
                );
            } else {
                render::notify(NoticeKind::Warning, format!("no document type with id {id}"));
            }
        }
    }
    Ok(())
}
