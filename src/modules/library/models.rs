use bookshelf_store::{
    lenient_year, validate_progress, validate_title, BookId, Record, ValidationError,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A library book with reading progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    /// `read_page == page_count` as of the last write
    pub finished: bool,
    pub reading: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub inserted_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Request body for create and update. Absent fields fall back to empty/zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookDraft {
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_year")]
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

/// Projection returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: BookId,
    pub name: String,
    pub publisher: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

impl Record for Book {
    type Draft = BookDraft;

    fn validate(draft: &BookDraft) -> Result<(), ValidationError> {
        validate_title(draft.name.as_deref())?;
        validate_progress(draft.read_page, draft.page_count)
    }

    fn create(id: BookId, draft: BookDraft, now: OffsetDateTime) -> Self {
        Self {
            id,
            name: draft.name.unwrap_or_default(),
            year: draft.year,
            author: draft.author,
            summary: draft.summary,
            publisher: draft.publisher,
            page_count: draft.page_count,
            read_page: draft.read_page,
            finished: draft.read_page == draft.page_count,
            reading: draft.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, draft: BookDraft, now: OffsetDateTime) {
        self.name = draft.name.unwrap_or_default();
        self.year = draft.year;
        self.author = draft.author;
        self.summary = draft.summary;
        self.publisher = draft.publisher;
        self.page_count = draft.page_count;
        self.read_page = draft.read_page;
        self.finished = draft.read_page == draft.page_count;
        self.reading = draft.reading;
        self.updated_at = now;
    }
}
