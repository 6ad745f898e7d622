//! Client-side query over the full document collection.
//!
//! Everything here is a pure function of its inputs: the caller loads the
//! collection and the type list once, then filters, sorts and pages in
//! memory.

use std::cmp::Ordering;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::document_types::document_type::{DocumentType, resolve_type_name};
use crate::domain::documents::document::{Document, format_display_date};

/// Page sizes offered by the document table.
pub const PAGE_SIZES: [usize; 3] = [5, 10, 25];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeCriterion {
    /// Exact match on `document_type_id`.
    Id(Uuid),
    /// Case-insensitive substring of the resolved type name.
    NameContains(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateCriterion {
    /// Exact match against the `DD/MM/YYYY` rendering of the creation date.
    Display(String),
    /// Inclusive calendar range; a missing bound is open.
    Range {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

/// Criteria combined with logical AND. `None` or blank text always matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentQuery {
    pub name: Option<String>,
    pub document_type: Option<TypeCriterion>,
    pub date: Option<DateCriterion>,
    pub status: Option<String>,
    /// Free text matched against every displayed column.
    pub search: Option<String>,
}

impl DocumentQuery {
    pub fn matches(&self, doc: &Document, types: &[DocumentType]) -> bool {
        let type_name = resolve_type_name(types, doc.document_type_id);

        let name_ok = text_matches(&doc.name, self.name.as_deref());
        let type_ok = match &self.document_type {
            None => true,
            Some(TypeCriterion::Id(id)) => doc.document_type_id == *id,
            Some(TypeCriterion::NameContains(text)) => text_matches(type_name, Some(text)),
        };
        let date_ok = match &self.date {
            None => true,
            Some(DateCriterion::Display(text)) => {
                text.trim().is_empty() || format_display_date(doc.creation_date) == text.trim()
            }
            Some(DateCriterion::Range { start, end }) => {
                start.is_none_or(|s| doc.creation_date >= s)
                    && end.is_none_or(|e| doc.creation_date <= e)
            }
        };
        let status_ok = text_matches(doc.status.as_str(), self.status.as_deref());
        let search_ok = match self.search.as_deref() {
            Some(text) if !text.trim().is_empty() => {
                let date = format_display_date(doc.creation_date);
                [doc.name.as_str(), type_name, date.as_str(), doc.status.as_str()]
                    .iter()
                    .any(|column| text_matches(column, Some(text)))
            }
            _ => true,
        };

        name_ok && type_ok && date_ok && status_ok && search_ok
    }
}

fn text_matches(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(n) if n.trim().is_empty() => true,
        Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
    }
}

pub fn filter_documents(
    docs: &[Document],
    types: &[DocumentType],
    query: &DocumentQuery,
) -> Vec<Document> {
    docs.iter()
        .filter(|d| query.matches(d, types))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Type,
    CreationDate,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Stable sort; ties keep their collection order in both directions.
pub fn sort_documents(docs: &mut [Document], types: &[DocumentType], order: SortOrder) {
    docs.sort_by(|a, b| {
        let ord = compare(a, b, types, order.field);
        match order.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

fn compare(a: &Document, b: &Document, types: &[DocumentType], field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Type => resolve_type_name(types, a.document_type_id)
            .to_lowercase()
            .cmp(&resolve_type_name(types, b.document_type_id).to_lowercase()),
        SortField::CreationDate => a.creation_date.cmp(&b.creation_date),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based.
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn first(page_size: usize) -> Self {
        Self { page: 0, page_size }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    /// Number of items before paging.
    pub total: usize,
}

impl<T> Page<T> {
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }
}

pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let size = request.page_size.max(1);
    let items = items
        .into_iter()
        .skip(request.page.saturating_mul(size))
        .take(size)
        .collect();
    Page {
        items,
        page: request.page,
        page_size: size,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document_types::document_type::UNKNOWN_TYPE_NAME;
    use crate::domain::documents::document::{Attachment, DocumentStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn doc(name: &str, type_id: Uuid, day: NaiveDate, status: DocumentStatus) -> Document {
        Document {
            id: Uuid::new_v4(),
            name: name.into(),
            document_type_id: type_id,
            creation_date: day,
            attachment: Attachment {
                file_name: "f.pdf".into(),
                mime_type: "application/pdf".into(),
                bytes: vec![1],
            },
            description: String::new(),
            status,
        }
    }

    struct Fixture {
        types: Vec<DocumentType>,
        docs: Vec<Document>,
    }

    fn fixture() -> Fixture {
        let invoice = DocumentType {
            id: Uuid::new_v4(),
            name: "Invoice".into(),
        };
        let contract = DocumentType {
            id: Uuid::new_v4(),
            name: "Contract".into(),
        };
        let docs = vec![
            doc("Invoice A", invoice.id, date(2024, 1, 10), DocumentStatus::Active),
            doc("Invoice B", invoice.id, date(2024, 2, 20), DocumentStatus::Deleted),
            doc("Lease", contract.id, date(2024, 3, 5), DocumentStatus::Active),
            doc("Orphan", Uuid::new_v4(), date(2023, 12, 31), DocumentStatus::Active),
        ];
        Fixture {
            types: vec![invoice, contract],
            docs,
        }
    }

    fn names(docs: &[Document]) -> Vec<&str> {
        docs.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let f = fixture();
        let out = filter_documents(&f.docs, &f.types, &DocumentQuery::default());
        assert_eq!(out.len(), f.docs.len());

        let blank = DocumentQuery {
            name: Some("  ".into()),
            status: Some(String::new()),
            search: Some(String::new()),
            date: Some(DateCriterion::Display(String::new())),
            ..Default::default()
        };
        assert_eq!(filter_documents(&f.docs, &f.types, &blank).len(), 4);
    }

    #[test]
    fn status_and_name_substrings() {
        let f = fixture();
        let docs = &f.docs[..2];

        let by_status = DocumentQuery {
            status: Some("active".into()),
            ..Default::default()
        };
        assert_eq!(names(&filter_documents(docs, &f.types, &by_status)), ["Invoice A"]);

        let by_name = DocumentQuery {
            name: Some("INVOICE".into()),
            ..Default::default()
        };
        assert_eq!(
            names(&filter_documents(docs, &f.types, &by_name)),
            ["Invoice A", "Invoice B"]
        );
    }

    #[test]
    fn type_by_id_or_resolved_name() {
        let f = fixture();
        let contract_id = f.types[1].id;

        let by_id = DocumentQuery {
            document_type: Some(TypeCriterion::Id(contract_id)),
            ..Default::default()
        };
        assert_eq!(names(&filter_documents(&f.docs, &f.types, &by_id)), ["Lease"]);

        let by_name = DocumentQuery {
            document_type: Some(TypeCriterion::NameContains("voic".into())),
            ..Default::default()
        };
        assert_eq!(
            names(&filter_documents(&f.docs, &f.types, &by_name)),
            ["Invoice A", "Invoice B"]
        );

        let unknown = DocumentQuery {
            document_type: Some(TypeCriterion::NameContains(UNKNOWN_TYPE_NAME.into())),
            ..Default::default()
        };
        assert_eq!(names(&filter_documents(&f.docs, &f.types, &unknown)), ["Orphan"]);
    }

    #[test]
    fn date_display_and_inclusive_range() {
        let f = fixture();

        let exact = DocumentQuery {
            date: Some(DateCriterion::Display("20/02/2024".into())),
            ..Default::default()
        };
        assert_eq!(names(&filter_documents(&f.docs, &f.types, &exact)), ["Invoice B"]);

        let range = DocumentQuery {
            date: Some(DateCriterion::Range {
                start: Some(date(2024, 1, 10)),
                end: Some(date(2024, 3, 5)),
            }),
            ..Default::default()
        };
        assert_eq!(
            names(&filter_documents(&f.docs, &f.types, &range)),
            ["Invoice A", "Invoice B", "Lease"]
        );

        let open_start = DocumentQuery {
            date: Some(DateCriterion::Range {
                start: None,
                end: Some(date(2024, 1, 10)),
            }),
            ..Default::default()
        };
        assert_eq!(
            names(&filter_documents(&f.docs, &f.types, &open_start)),
            ["Invoice A", "Orphan"]
        );
    }

    #[test]
    fn criteria_combine_with_and() {
        let f = fixture();
        let q = DocumentQuery {
            name: Some("invoice".into()),
            status: Some("del".into()),
            ..Default::default()
        };
        assert_eq!(names(&filter_documents(&f.docs, &f.types, &q)), ["Invoice B"]);
    }

    #[test]
    fn quick_search_spans_columns() {
        let f = fixture();
        let by_type = DocumentQuery {
            search: Some("contract".into()),
            ..Default::default()
        };
        assert_eq!(names(&filter_documents(&f.docs, &f.types, &by_type)), ["Lease"]);

        let by_date = DocumentQuery {
            search: Some("/12/2023".into()),
            ..Default::default()
        };
        assert_eq!(names(&filter_documents(&f.docs, &f.types, &by_date)), ["Orphan"]);
    }

    #[test]
    fn filtering_is_deterministic() {
        let f = fixture();
        let q = DocumentQuery {
            search: Some("a".into()),
            ..Default::default()
        };
        assert_eq!(
            filter_documents(&f.docs, &f.types, &q),
            filter_documents(&f.docs, &f.types, &q)
        );
    }

    #[test]
    fn sorts_by_each_field() {
        let f = fixture();
        let mut docs = f.docs.clone();

        sort_documents(
            &mut docs,
            &f.types,
            SortOrder {
                field: SortField::CreationDate,
                direction: SortDirection::Ascending,
            },
        );
        assert_eq!(names(&docs), ["Orphan", "Invoice A", "Invoice B", "Lease"]);

        sort_documents(
            &mut docs,
            &f.types,
            SortOrder {
                field: SortField::Name,
                direction: SortDirection::Descending,
            },
        );
        assert_eq!(names(&docs), ["Orphan", "Lease", "Invoice B", "Invoice A"]);

        // Contract < Invoice < Unknown type; the two invoices keep their order.
        sort_documents(
            &mut docs,
            &f.types,
            SortOrder {
                field: SortField::Type,
                direction: SortDirection::Ascending,
            },
        );
        assert_eq!(names(&docs), ["Lease", "Invoice B", "Invoice A", "Orphan"]);
    }

    #[test]
    fn pages_slice_the_filtered_list() {
        let items: Vec<u32> = (1..=12).collect();

        let second = paginate(items.clone(), PageRequest { page: 1, page_size: 5 });
        assert_eq!(second.items, vec![6, 7, 8, 9, 10]);
        assert_eq!(second.total, 12);
        assert_eq!(second.page_count(), 3);

        let last = paginate(items.clone(), PageRequest { page: 2, page_size: 5 });
        assert_eq!(last.items, vec![11, 12]);

        let beyond = paginate(items, PageRequest { page: 9, page_size: 5 });
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 12);
    }
}
