use serde::Serialize;
use uuid::Uuid;

use crate::application::services::filtering::Page;
use crate::domain::document_types::document_type::{DocumentType, resolve_type_name};
use crate::domain::documents::document::{Document, format_display_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    fn label(&self) -> &'static str {
        match self {
            NoticeKind::Success => "ok",
            NoticeKind::Error => "error",
            NoticeKind::Warning => "warning",
            NoticeKind::Info => "info",
        }
    }
}

/// One-line outcome message on stderr, keeping stdout for command output.
pub fn notify(kind: NoticeKind, message: impl AsRef<str>) {
    eprintln!("[{}] {}", kind.label(), message.as_ref());
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub id: Uuid,
    pub name: String,
    pub document_type_id: Uuid,
    pub document_type: String,
    pub creation_date: String,
    pub file_name: String,
    pub file_type: String,
    pub file_size: usize,
    pub description: String,
    pub status: String,
}

impl DocumentView {
    pub fn new(doc: &Document, types: &[DocumentType]) -> Self {
        DocumentView {
            id: doc.id,
            name: doc.name.clone(),
            document_type_id: doc.document_type_id,
            document_type: resolve_type_name(types, doc.document_type_id).to_string(),
            creation_date: format_display_date(doc.creation_date),
            file_name: doc.attachment.file_name.clone(),
            file_type: doc.attachment.mime_type.clone(),
            file_size: doc.attachment.size(),
            description: doc.description.clone(),
            status: doc.status.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPageView {
    pub items: Vec<DocumentView>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

pub fn page_view(page: &Page<Document>, types: &[DocumentType]) -> DocumentPageView {
    DocumentPageView {
        items: page
            .items
            .iter()
            .map(|d| DocumentView::new(d, types))
            .collect(),
        page: page.page,
        page_size: page.page_size,
        total: page.total,
    }
}

pub fn document_table(page: &Page<Document>, types: &[DocumentType]) -> String {
    if page.items.is_empty() {
        return "No documents found.".to_string();
    }
    let rows: Vec<[String; 5]> = page
        .items
        .iter()
        .map(|d| {
            [
                d.name.clone(),
                resolve_type_name(types, d.document_type_id).to_string(),
                format_display_date(d.creation_date),
                d.status.to_string(),
                d.id.to_string(),
            ]
        })
        .collect();
    let mut out = table(["Name", "Type", "Created", "Status", "Id"], &rows);
    out.push_str(&format!(
        "\npage {}/{} ({} documents)",
        page.page + 1,
        page.page_count().max(1),
        page.total
    ));
    out
}

pub fn type_table(types: &[DocumentType]) -> String {
    if types.is_empty() {
        return "No document types defined.".to_string();
    }
    let rows: Vec<[String; 2]> = types
        .iter()
        .map(|t| [t.name.clone(), t.id.to_string()])
        .collect();
    table(["Name", "Id"], &rows)
}

pub fn document_details(doc: &Document, types: &[DocumentType]) -> String {
    let view = DocumentView::new(doc, types);
    format!(
        "Name:        {}\nType:        {}\nCreated:     {}\nDescription: {}\nStatus:      {}\nFile:        {} ({}, {} bytes)\nId:          {}",
        view.name,
        view.document_type,
        view.creation_date,
        view.description,
        view.status,
        view.file_name,
        view.file_type,
        view.file_size,
        view.id
    )
}

fn table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }
    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };
    let mut lines = vec![line(headers.to_vec())];
    for row in rows {
        lines.push(line(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}
