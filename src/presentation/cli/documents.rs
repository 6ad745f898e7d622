use std::path::PathBuf;

use anyhow::{Context, bail};
use uuid::Uuid;

use crate::application::services::filtering::{
    DateCriterion, DocumentQuery, PageRequest, TypeCriterion,
};
use crate::application::use_cases::documents::create_document::CreateDocument;
use crate::application::use_cases::documents::delete_document::DeleteDocument;
use crate::application::use_cases::documents::download_document::DownloadDocument;
use crate::application::use_cases::documents::get_document::GetDocument;
use crate::application::use_cases::documents::list_documents::ListDocuments;
use crate::application::use_cases::documents::reactivate_document::ReactivateDocument;
use crate::application::use_cases::documents::update_document::UpdateDocument;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::cli::form::{self, DocumentForm};
use crate::presentation::cli::render::{self, NoticeKind};
use crate::presentation::cli::{AddArgs, ListArgs, UpdateArgs};

pub async fn add(ctx: &AppContext, args: AddArgs) -> anyhow::Result<()> {
    let types = ctx.document_type_repo();
    form::ensure_type_exists(types.as_ref(), args.type_id).await?;
    let attachment = form::read_attachment(&args.file, ctx.cfg.upload_max_bytes).await?;
    let input = DocumentForm {
        name: args.name,
        document_type_id: args.type_id,
        description: args.description,
        creation_date: args.date,
    }
    .into_new_document(attachment)?;

    let repo = ctx.document_repo();
    let uc = CreateDocument {
        repo: repo.as_ref(),
    };
    let doc = uc.execute(input).await?;
    println!("{}", doc.id);
    render::notify(NoticeKind::Success, format!("document {:?} created", doc.name));
    Ok(())
}

/// Applies the given flags over the stored record and saves the result as a
/// complete document.
pub async fn update(ctx: &AppContext, args: UpdateArgs) -> anyhow::Result<()> {
    let repo = ctx.document_repo();
    let Some(mut doc) = GetDocument {
        repo: repo.as_ref(),
    }
    .execute(args.id)
    .await?
    else {
        bail!("no document with id {}", args.id);
    };
    if doc.is_deleted() {
        bail!("document {} is deleted; reactivate it before editing", args.id);
    }

    if let Some(name) = args.name {
        doc.name = form::require("name", &name)?;
    }
    if let Some(type_id) = args.type_id {
        let types = ctx.document_type_repo();
        form::ensure_type_exists(types.as_ref(), type_id).await?;
        doc.document_type_id = type_id;
    }
    if let Some(description) = args.description {
        doc.description = form::require("description", &description)?;
    }
    if let Some(date) = args.date {
        doc.creation_date = date;
    }
    if let Some(path) = args.file {
        doc.attachment = form::read_attachment(&path, ctx.cfg.upload_max_bytes).await?;
    }

    let uc = UpdateDocument {
        repo: repo.as_ref(),
    };
    match uc.execute(doc).await? {
        Some(saved) => {
            render::notify(NoticeKind::Success, format!("document {:?} updated", saved.name));
            Ok(())
        }
        None => bail!("no document with id {}", args.id),
    }
}

pub async fn delete(ctx: &AppContext, id: Uuid) -> anyhow::Result<()> {
    let repo = ctx.document_repo();
    let uc = DeleteDocument {
        repo: repo.as_ref(),
    };
    if uc.execute(id).await? {
        render::notify(NoticeKind::Success, format!("document {id} deleted"));
    } else {
        render::notify(NoticeKind::Warning, format!("no document with id {id}"));
    }
    Ok(())
}

pub async fn reactivate(ctx: &AppContext, id: Uuid) -> anyhow::Result<()> {
    let repo = ctx.document_repo();
    let uc = ReactivateDocument {
        repo: repo.as_ref(),
    };
    if uc.execute(id).await? {
        render::notify(NoticeKind::Success, format!("document {id} reactivated"));
    } else {
        render::notify(NoticeKind::Warning, format!("no document with id {id}"));
    }
    Ok(())
}

pub async fn show(ctx: &AppContext, id: Uuid, json: bool) -> anyhow::Result<()> {
    let repo = ctx.document_repo();
    let Some(doc) = GetDocument {
        repo: repo.as_ref(),
    }
    .execute(id)
    .await?
    else {
        bail!("no document with id {id}");
    };
    let types = ctx.document_type_repo().get_all().await?;
    if json {
        let view = render::DocumentView::new(&doc, &types);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render::document_details(&doc, &types));
    }
    Ok(())
}

pub async fn download(
    ctx: &AppContext,
    id: Uuid,
    out: Option<PathBuf>,
    force: bool,
) -> anyhow::Result<()> {
    let repo = ctx.document_repo();
    let uc = DownloadDocument {
        repo: repo.as_ref(),
    };
    let Some(file) = uc.execute(id).await? else {
        bail!("document {id} has no file to download");
    };
    let target = out.unwrap_or_else(|| PathBuf::from(&file.filename));
    let exists = tokio::fs::try_exists(&target)
        .await
        .with_context(|| format!("check {}", target.display()))?;
    if !force && exists {
        bail!("{} already exists; pass --force to replace it", target.display());
    }
    tokio::fs::write(&target, &file.bytes)
        .await
        .with_context(|| format!("write {}", target.display()))?;
    render::notify(
        NoticeKind::Success,
        format!(
            "saved {} ({}, {} bytes)",
            target.display(),
            file.content_type,
            file.bytes.len()
        ),
    );
    Ok(())
}

pub async fn list(ctx: &AppContext, args: ListArgs) -> anyhow::Result<()> {
    let order = args.sort_order();
    let page = PageRequest {
        page: (args.page as usize).saturating_sub(1),
        page_size: args.page_size.unwrap_or(ctx.cfg.page_size),
    };
    let json = args.json;
    let query = query_from_args(args);

    let documents = ctx.document_repo();
    let types = ctx.document_type_repo();
    let uc = ListDocuments {
        documents: documents.as_ref(),
        types: types.as_ref(),
    };
    let listing = uc.execute(&query, order, page).await?;
    if json {
        let view = render::page_view(&listing.page, &listing.types);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render::document_table(&listing.page, &listing.types));
    }
    Ok(())
}

pub fn query_from_args(args: ListArgs) -> DocumentQuery {
    let document_type = match (args.type_id, args.type_name) {
        (Some(id), _) => Some(TypeCriterion::Id(id)),
        (None, Some(name)) => Some(TypeCriterion::NameContains(name)),
        (None, None) => None,
    };
    let date = match (args.date, args.from, args.to) {
        (Some(display), _, _) => Some(DateCriterion::Display(display)),
        (None, None, None) => None,
        (None, start, end) => Some(DateCriterion::Range { start, end }),
    };
    DocumentQuery {
        name: args.name,
        document_type,
        date,
        status: args.status,
        search: args.search,
    }
}
