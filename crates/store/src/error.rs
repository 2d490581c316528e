use thiserror::Error;

use crate::BookId;

/// Reasons a draft is refused on create or update.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing title")]
    MissingTitle,

    #[error("readPage ({read_page}) exceeds pageCount ({page_count})")]
    ReadPageExceedsPageCount { read_page: u32, page_count: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("book {0} not found")]
    NotFound(BookId),
}

pub type StoreResult<T> = Result<T, StoreError>;
