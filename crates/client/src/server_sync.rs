//! Server-authoritative bookshelf.
//!
//! [`BooksClient`] wraps the `/api/books` routes. [`ServerShelf`] drives it the
//! way the page does: every action goes through the API, then the whole list is
//! fetched again and re-rendered.

use axum::http::{Method, StatusCode};
use bookshelf_app::modules::shelf::{
    handlers::{BookList, Created},
    models::{ShelfBook, ShelfBookDraft},
};
use bookshelf_http::{error::ErrorBody, response::ApiResponse};
use bookshelf_store::BookId;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};
use crate::transport::{ApiRequest, HttpClient, RawResponse};
use crate::view::ShelfView;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000/api/books";

/// Typed access to the shelf routes.
pub struct BooksClient<C: HttpClient> {
    base_url: Url,
    client: C,
}

impl<C: HttpClient> BooksClient<C> {
    pub fn new(base_url: &str, client: C) -> ClientResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| ClientError::InvalidBaseUrl(format!("{base_url}: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// All books, or those whose title contains `title` when given.
    pub async fn list(&self, title: Option<&str>) -> ClientResult<Vec<ShelfBook>> {
        let mut url = self.base_url.clone();
        if let Some(title) = title {
            url.query_pairs_mut().append_pair("title", title);
        }

        let envelope: ApiResponse<BookList> = self.call(Method::GET, url, None).await?;
        Ok(envelope.data.map(|list| list.books).unwrap_or_default())
    }

    pub async fn create(&self, draft: &ShelfBookDraft) -> ClientResult<BookId> {
        let body = serde_json::to_value(draft)?;
        let envelope: ApiResponse<Created> = self
            .call(Method::POST, self.base_url.clone(), Some(body))
            .await?;
        envelope
            .data
            .map(|created| created.book_id)
            .ok_or_else(|| ClientError::Transport("created response carried no bookId".into()))
    }

    pub async fn update(&self, id: &BookId, draft: &ShelfBookDraft) -> ClientResult<()> {
        let body = serde_json::to_value(draft)?;
        let _: ApiResponse<serde_json::Value> =
            self.call(Method::PUT, self.book_url(id)?, Some(body)).await?;
        Ok(())
    }

    pub async fn delete(&self, id: &BookId) -> ClientResult<()> {
        let _: ApiResponse<serde_json::Value> =
            self.call(Method::DELETE, self.book_url(id)?, None).await?;
        Ok(())
    }

    fn book_url(&self, id: &BookId) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> ClientResult<ApiResponse<T>> {
        tracing::debug!(%method, %url, "calling bookshelf api");
        let response = self.client.send(ApiRequest { method, url, body }).await?;
        decode(response)
    }
}

fn decode<T: DeserializeOwned>(response: RawResponse) -> ClientResult<ApiResponse<T>> {
    let RawResponse { status, body } = response;

    if status.is_success() {
        let envelope: ApiResponse<T> = serde_json::from_slice(&body)?;
        if envelope.is_success() {
            return Ok(envelope);
        }
        return Err(rejected(status, envelope.message));
    }

    if let Ok(envelope) = serde_json::from_slice::<ApiResponse<serde_json::Value>>(&body) {
        return Err(rejected(status, envelope.message));
    }
    if let Ok(error) = serde_json::from_slice::<ErrorBody>(&body) {
        return Err(rejected(status, Some(error.message)));
    }
    Err(rejected(
        status,
        Some(String::from_utf8_lossy(&body).into_owned()),
    ))
}

fn rejected(status: StatusCode, message: Option<String>) -> ClientError {
    ClientError::Rejected {
        status: status.as_u16(),
        message: message.unwrap_or_else(|| status.to_string()),
    }
}

/// Fields of the add form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub is_read: bool,
}

impl From<NewBook> for ShelfBookDraft {
    fn from(book: NewBook) -> Self {
        Self {
            title: Some(book.title),
            author: book.author,
            year: book.year,
            is_read: book.is_read,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncState {
    #[default]
    Idle,
    Submitting,
}

/// Page state for the server-backed shelf.
///
/// Actions never return errors. A transport failure is logged and the
/// previous view is kept; a rejected request is logged and the list is
/// reloaded anyway. The last failure is available from [`Self::last_error`].
pub struct ServerShelf<C: HttpClient> {
    api: BooksClient<C>,
    state: SyncState,
    books: Vec<ShelfBook>,
    view: ShelfView,
    last_error: Option<ClientError>,
}

impl<C: HttpClient> ServerShelf<C> {
    pub fn new(api: BooksClient<C>) -> Self {
        Self {
            api,
            state: SyncState::Idle,
            books: Vec::new(),
            view: ShelfView::default(),
            last_error: None,
        }
    }

    /// Fetches the full list and re-renders both sections.
    pub async fn load(&mut self) {
        match self.api.list(None).await {
            Ok(books) => {
                self.view = ShelfView::render(&books);
                self.books = books;
                tracing::debug!(count = self.books.len(), "shelf rendered");
            }
            Err(err) => self.record_failure("reload", err),
        }
    }

    pub async fn add(&mut self, book: NewBook) {
        self.state = SyncState::Submitting;
        let draft = ShelfBookDraft::from(book);
        let outcome = self.api.create(&draft).await.map(|book_id| {
            tracing::info!(book_id = %book_id, "book submitted");
        });
        self.finish("add", outcome).await;
    }

    /// Re-sends the known record with the read flag set.
    pub async fn mark_as_read(&mut self, id: &BookId) {
        self.state = SyncState::Submitting;
        let outcome = match self.books.iter().find(|book| &book.id == id) {
            Some(book) => {
                let draft = ShelfBookDraft::from_book(book, true);
                self.api.update(id, &draft).await
            }
            None => Err(ClientError::UnknownBook(id.to_string())),
        };
        self.finish("mark as read", outcome).await;
    }

    pub async fn delete(&mut self, id: &BookId) {
        self.state = SyncState::Submitting;
        let outcome = self.api.delete(id).await;
        self.finish("delete", outcome).await;
    }

    /// Issues the filtered query, then reloads the unfiltered list. The
    /// filtered result is not rendered.
    pub async fn search(&mut self, query: &str) {
        match self.api.list(Some(query)).await {
            Ok(matches) => {
                tracing::debug!(query, matches = matches.len(), "search returned");
                self.load().await;
            }
            Err(err) => self.record_failure("search", err),
        }
    }

    pub fn view(&self) -> &ShelfView {
        &self.view
    }

    pub fn books(&self) -> &[ShelfBook] {
        &self.books
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn last_error(&self) -> Option<&ClientError> {
        self.last_error.as_ref()
    }

    async fn finish(&mut self, action: &'static str, outcome: ClientResult<()>) {
        match outcome {
            Ok(()) => {
                self.last_error = None;
                self.load().await;
            }
            Err(err @ (ClientError::Rejected { .. } | ClientError::UnknownBook(_))) => {
                self.record_failure(action, err);
                self.load().await;
            }
            Err(err) => self.record_failure(action, err),
        }
        self.state = SyncState::Idle;
    }

    fn record_failure(&mut self, action: &'static str, err: ClientError) {
        tracing::error!(action, error = %err, "bookshelf request failed");
        self.last_error = Some(err);
    }
}
