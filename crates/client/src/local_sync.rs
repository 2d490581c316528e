//! Client-authoritative bookshelf mirrored into local storage.
//!
//! Each book is an explicit [`StoredBook`] model that is both rendered and
//! persisted, so nothing is ever parsed back out of rendered text. After
//! every mutation the two lists are written to [`INCOMPLETE_KEY`] and
//! [`COMPLETE_KEY`] in display order.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use bookshelf_app::utils::title_matches;
use bookshelf_store::lenient_year;

use crate::error::{ClientError, ClientResult};
use crate::storage::KeyValueStorage;
use crate::view::{BookElement, BookshelfView};

pub const INCOMPLETE_KEY: &str = "incompleteBookshelf";
pub const COMPLETE_KEY: &str = "completeBookshelf";

/// Persisted form of one book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredBook {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: i32,
    #[serde(default)]
    pub is_complete: bool,
}

#[derive(Debug, Clone)]
struct Card {
    book: StoredBook,
    visible: bool,
}

impl Card {
    fn new(book: StoredBook) -> Self {
        Self {
            book,
            visible: true,
        }
    }
}

pub struct LocalShelf<S: KeyValueStorage> {
    storage: S,
    incomplete: Vec<Card>,
    complete: Vec<Card>,
    last_id: i64,
}

impl<S: KeyValueStorage> LocalShelf<S> {
    /// Rehydrates both lists from storage; a missing entry is an empty list.
    /// The completion flag comes from the entry a book was read from.
    pub fn load(storage: S) -> ClientResult<Self> {
        let incomplete = read_entry(&storage, INCOMPLETE_KEY, false)?;
        let complete = read_entry(&storage, COMPLETE_KEY, true)?;
        let last_id = incomplete
            .iter()
            .chain(&complete)
            .map(|card| card.book.id)
            .max()
            .unwrap_or(0);

        tracing::debug!(
            incomplete = incomplete.len(),
            complete = complete.len(),
            "bookshelf loaded from storage"
        );

        Ok(Self {
            storage,
            incomplete,
            complete,
            last_id,
        })
    }

    /// Adds a book with a timestamp-derived id and persists. Ids issued within
    /// the same millisecond are bumped to stay unique.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        is_complete: bool,
    ) -> ClientResult<i64> {
        let id = self.next_id();
        let book = StoredBook {
            id,
            title: title.into(),
            author: author.into(),
            year,
            is_complete,
        };

        self.list_mut(is_complete).push(Card::new(book));
        self.persist()?;

        tracing::info!(book_id = id, is_complete, "book added to shelf");
        Ok(id)
    }

    /// Moves the book to the other list (appended at the end) and persists.
    pub fn move_book(&mut self, id: i64) -> ClientResult<()> {
        let mut card = self.take(id)?;
        card.book.is_complete = !card.book.is_complete;
        let is_complete = card.book.is_complete;
        self.list_mut(is_complete).push(card);
        self.persist()?;

        tracing::info!(book_id = id, is_complete, "book moved");
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> ClientResult<()> {
        self.take(id)?;
        self.persist()?;

        tracing::info!(book_id = id, "book deleted from shelf");
        Ok(())
    }

    /// Shows only books whose title contains `query`, ignoring case. Not
    /// persisted; books added later start visible.
    pub fn search(&mut self, query: &str) {
        for card in self.incomplete.iter_mut().chain(self.complete.iter_mut()) {
            card.visible = title_matches(&card.book.title, query);
        }
    }

    /// Overwrites both storage entries with the current lists.
    pub fn persist(&mut self) -> ClientResult<()> {
        let incomplete: Vec<&StoredBook> = self.incomplete.iter().map(|card| &card.book).collect();
        let complete: Vec<&StoredBook> = self.complete.iter().map(|card| &card.book).collect();

        self.storage
            .set_item(INCOMPLETE_KEY, &serde_json::to_string(&incomplete)?)?;
        self.storage
            .set_item(COMPLETE_KEY, &serde_json::to_string(&complete)?)?;
        Ok(())
    }

    /// All books, incomplete list first.
    pub fn books(&self) -> impl Iterator<Item = &StoredBook> + '_ {
        self.incomplete
            .iter()
            .chain(&self.complete)
            .map(|card| &card.book)
    }

    pub fn get(&self, id: i64) -> Option<&StoredBook> {
        self.books().find(|book| book.id == id)
    }

    pub fn render(&self) -> BookshelfView {
        let render = |cards: &[Card]| -> Vec<BookElement> {
            cards
                .iter()
                .map(|card| BookElement::render(&card.book, card.visible))
                .collect()
        };
        BookshelfView {
            incomplete: render(&self.incomplete),
            complete: render(&self.complete),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn list_mut(&mut self, is_complete: bool) -> &mut Vec<Card> {
        if is_complete {
            &mut self.complete
        } else {
            &mut self.incomplete
        }
    }

    fn take(&mut self, id: i64) -> ClientResult<Card> {
        for list in [&mut self.incomplete, &mut self.complete] {
            if let Some(index) = list.iter().position(|card| card.book.id == id) {
                return Ok(list.remove(index));
            }
        }
        Err(ClientError::UnknownBook(id.to_string()))
    }

    fn next_id(&mut self) -> i64 {
        let now_ms = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
        self.last_id = now_ms.max(self.last_id + 1);
        self.last_id
    }
}

fn read_entry<S: KeyValueStorage>(
    storage: &S,
    key: &str,
    is_complete: bool,
) -> ClientResult<Vec<Card>> {
    let Some(raw) = storage.get_item(key)? else {
        return Ok(Vec::new());
    };

    let books: Option<Vec<StoredBook>> = serde_json::from_str(&raw).map_err(|err| {
        tracing::error!(key, error = %err, "stored bookshelf entry is unreadable");
        err
    })?;

    Ok(books
        .unwrap_or_default()
        .into_iter()
        .map(|book| {
            Card::new(StoredBook {
                is_complete,
                ..book
            })
        })
        .collect())
}
