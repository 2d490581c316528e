use std::collections::HashMap;

use time::OffsetDateTime;

use crate::{BookId, Record, StoreError, StoreResult};

/// Insertion-ordered in-memory collection of records keyed by [`BookId`].
///
/// Mutation goes through `create`, `update` and `delete` only. The store
/// itself is not synchronized; callers share it behind a lock.
pub struct BookStore<R: Record> {
    records: HashMap<BookId, R>,
    order: Vec<BookId>,
}

impl<R: Record> BookStore<R> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Validates the draft, assigns a fresh id and appends the record.
    pub fn create(&mut self, draft: R::Draft) -> StoreResult<BookId> {
        R::validate(&draft)?;

        let id = BookId::generate();
        let record = R::create(id.clone(), draft, OffsetDateTime::now_utc());
        self.records.insert(id.clone(), record);
        self.order.push(id.clone());

        tracing::debug!(book_id = %id, total = self.order.len(), "book created");
        Ok(id)
    }

    /// All records in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &R> + '_ {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Records matching `predicate`, in insertion order.
    pub fn filter<'a, P>(&'a self, mut predicate: P) -> Vec<&'a R>
    where
        P: FnMut(&R) -> bool,
    {
        self.list().filter(|record| predicate(record)).collect()
    }

    pub fn get(&self, id: &str) -> StoreResult<&R> {
        self.records
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.into()))
    }

    /// Replaces the record's fields. An unknown id is reported before any
    /// validation failure; a rejected draft leaves the record untouched.
    pub fn update(&mut self, id: &str, draft: R::Draft) -> StoreResult<()> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.into()))?;

        R::validate(&draft)?;
        record.apply(draft, OffsetDateTime::now_utc());

        tracing::debug!(book_id = %id, "book updated");
        Ok(())
    }

    /// Removes and returns the record.
    pub fn delete(&mut self, id: &str) -> StoreResult<R> {
        let record = self
            .records
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.into()))?;
        self.order.retain(|existing| existing.as_str() != id);

        tracing::debug!(book_id = %id, total = self.order.len(), "book deleted");
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<R: Record> Default for BookStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate_progress, validate_title, ValidationError};

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: BookId,
        title: String,
        pages: (u32, u32),
        created: OffsetDateTime,
        touched: OffsetDateTime,
    }

    struct NoteDraft {
        title: Option<String>,
        read_page: u32,
        page_count: u32,
    }

    fn draft(title: &str, read_page: u32, page_count: u32) -> NoteDraft {
        NoteDraft {
            title: Some(title.to_string()),
            read_page,
            page_count,
        }
    }

    impl Record for Note {
        type Draft = NoteDraft;

        fn validate(draft: &NoteDraft) -> Result<(), ValidationError> {
            validate_title(draft.title.as_deref())?;
            validate_progress(draft.read_page, draft.page_count)
        }

        fn create(id: BookId, draft: NoteDraft, now: OffsetDateTime) -> Self {
            Self {
                id,
                title: draft.title.unwrap_or_default(),
                pages: (draft.read_page, draft.page_count),
                created: now,
                touched: now,
            }
        }

        fn apply(&mut self, draft: NoteDraft, now: OffsetDateTime) {
            self.title = draft.title.unwrap_or_default();
            self.pages = (draft.read_page, draft.page_count);
            self.touched = now;
        }
    }

    fn titles(store: &BookStore<Note>) -> Vec<String> {
        store.list().map(|note| note.title.clone()).collect()
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = BookStore::<Note>::new();
        for title in ["c", "a", "b"] {
            store.create(draft(title, 0, 1)).unwrap();
        }
        assert_eq!(titles(&store), vec!["c", "a", "b"]);
    }

    #[test]
    fn create_rejects_invalid_drafts() {
        let mut store = BookStore::<Note>::new();
        let missing = NoteDraft {
            title: None,
            read_page: 0,
            page_count: 0,
        };
        assert_eq!(
            store.create(missing).unwrap_err(),
            StoreError::Validation(ValidationError::MissingTitle)
        );
        assert!(matches!(
            store.create(draft("x", 5, 4)).unwrap_err(),
            StoreError::Validation(ValidationError::ReadPageExceedsPageCount { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn get_returns_created_record() {
        let mut store = BookStore::<Note>::new();
        let id = store.create(draft("Dune", 10, 412)).unwrap();

        let note = store.get(id.as_str()).unwrap();
        assert_eq!(note.id, id);
        assert_eq!(note.title, "Dune");
        assert_eq!(note.pages, (10, 412));
        assert_eq!(
            store.get("missing").unwrap_err(),
            StoreError::NotFound("missing".into())
        );
    }

    #[test]
    fn failed_update_leaves_record_unmodified() {
        let mut store = BookStore::<Note>::new();
        let id = store.create(draft("Dune", 10, 412)).unwrap();
        let before = store.get(id.as_str()).unwrap().clone();

        let err = store.update(id.as_str(), draft("Dune", 500, 412)).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.get(id.as_str()).unwrap(), &before);
    }

    #[test]
    fn update_reports_not_found_before_validation() {
        let mut store = BookStore::<Note>::new();
        let invalid = NoteDraft {
            title: None,
            read_page: 9,
            page_count: 1,
        };
        assert_eq!(
            store.update("nope", invalid).unwrap_err(),
            StoreError::NotFound("nope".into())
        );
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut store = BookStore::<Note>::new();
        let first = store.create(draft("a", 0, 1)).unwrap();
        store.create(draft("b", 0, 1)).unwrap();

        store.update(first.as_str(), draft("A", 1, 1)).unwrap();

        let note = store.get(first.as_str()).unwrap();
        assert_eq!(note.id, first);
        assert!(note.touched >= note.created);
        assert_eq!(titles(&store), vec!["A", "b"]);
    }

    #[test]
    fn delete_twice_reports_not_found() {
        let mut store = BookStore::<Note>::new();
        let a = store.create(draft("a", 0, 1)).unwrap();
        store.create(draft("b", 0, 1)).unwrap();
        store.create(draft("c", 0, 1)).unwrap();

        assert_eq!(store.delete(a.as_str()).unwrap().title, "a");
        assert_eq!(
            store.delete(a.as_str()).unwrap_err(),
            StoreError::NotFound(a.clone())
        );
        assert_eq!(titles(&store), vec!["b", "c"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn filter_keeps_order() {
        let mut store = BookStore::<Note>::new();
        for (title, read) in [("x", 1), ("y", 0), ("z", 1)] {
            store.create(draft(title, read, 1)).unwrap();
        }
        let finished: Vec<&str> = store
            .filter(|note| note.pages.0 == note.pages.1)
            .into_iter()
            .map(|note| note.title.as_str())
            .collect();
        assert_eq!(finished, vec!["x", "z"]);
    }
}
