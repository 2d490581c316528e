use bookshelf_store::{lenient_year, validate_title, BookId, Record, ValidationError};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A shelf entry with a directly-set read flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfBook {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub is_read: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShelfBookDraft {
    pub title: Option<String>,
    pub author: String,
    #[serde(deserialize_with = "lenient_year")]
    pub year: i32,
    pub is_read: bool,
}

impl ShelfBookDraft {
    /// Draft carrying every field of `book` with the read flag overridden.
    pub fn from_book(book: &ShelfBook, is_read: bool) -> Self {
        Self {
            title: Some(book.title.clone()),
            author: book.author.clone(),
            year: book.year,
            is_read,
        }
    }
}

impl Record for ShelfBook {
    type Draft = ShelfBookDraft;

    fn validate(draft: &ShelfBookDraft) -> Result<(), ValidationError> {
        validate_title(draft.title.as_deref())
    }

    fn create(id: BookId, draft: ShelfBookDraft, _now: OffsetDateTime) -> Self {
        Self {
            id,
            title: draft.title.unwrap_or_default(),
            author: draft.author,
            year: draft.year,
            is_read: draft.is_read,
        }
    }

    fn apply(&mut self, draft: ShelfBookDraft, _now: OffsetDateTime) {
        self.title = draft.title.unwrap_or_default();
        self.author = draft.author;
        self.year = draft.year;
        self.is_read = draft.is_read;
    }
}
