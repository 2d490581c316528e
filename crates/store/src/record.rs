use time::OffsetDateTime;

use crate::{BookId, ValidationError};

/// A book variant that can live in a [`crate::BookStore`].
pub trait Record: Send + Sync + 'static {
    /// Client-supplied fields for create and full-replacement update.
    type Draft: Send;

    /// Checks applied identically on create and update.
    fn validate(draft: &Self::Draft) -> Result<(), ValidationError>;

    /// Builds a new record; `now` is the creation instant.
    fn create(id: BookId, draft: Self::Draft, now: OffsetDateTime) -> Self;

    /// Replaces every field except the id (and creation time, if any).
    fn apply(&mut self, draft: Self::Draft, now: OffsetDateTime);
}

/// Presence check shared by every variant: absent or empty is missing.
pub fn validate_title(title: Option<&str>) -> Result<(), ValidationError> {
    match title {
        Some(title) if !title.is_empty() => Ok(()),
        _ => Err(ValidationError::MissingTitle),
    }
}

pub fn validate_progress(read_page: u32, page_count: u32) -> Result<(), ValidationError> {
    if read_page > page_count {
        return Err(ValidationError::ReadPageExceedsPageCount {
            read_page,
            page_count,
        });
    }
    Ok(())
}
