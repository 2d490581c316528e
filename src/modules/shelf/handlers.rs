use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use bookshelf_http::{
    error::AppError,
    response::{created, ok, ApiResponse, Reply},
};
use bookshelf_store::BookId;
use serde::{Deserialize, Serialize};

use super::models::{ShelfBook, ShelfBookDraft};
use super::SharedStore;
use crate::modules::feedback::{reject, Action};
use crate::utils::title_matches;

const TITLE_FIELD: &str = "judul";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Created {
    pub book_id: BookId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookList {
    pub books: Vec<ShelfBook>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookDetail {
    pub book: ShelfBook,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring filter on the title
    pub title: Option<String>,
}

pub async fn create_book(
    State(store): State<SharedStore>,
    payload: Result<Json<ShelfBookDraft>, JsonRejection>,
) -> Result<Reply<Created>, AppError> {
    let Json(draft) = payload?;

    let book_id = store
        .write()
        .await
        .create(draft)
        .map_err(|err| reject(Action::Add, err, TITLE_FIELD))?;

    tracing::info!(book_id = %book_id, "shelf book added");
    Ok(created(
        ApiResponse::success(Created { book_id }).with_message("Buku berhasil ditambahkan"),
    ))
}

pub async fn list_books(
    State(store): State<SharedStore>,
    Query(params): Query<ListParams>,
) -> Reply<BookList> {
    let store = store.read().await;
    let books = match params.title.as_deref() {
        Some(query) => store
            .filter(|book| title_matches(&book.title, query))
            .into_iter()
            .cloned()
            .collect(),
        None => store.list().cloned().collect(),
    };

    ok(ApiResponse::success(BookList { books }))
}

pub async fn get_book(
    State(store): State<SharedStore>,
    Path(book_id): Path<String>,
) -> Result<Reply<BookDetail>, AppError> {
    let store = store.read().await;
    let book = store
        .get(&book_id)
        .map_err(|err| reject(Action::Get, err, TITLE_FIELD))?
        .clone();

    Ok(ok(ApiResponse::success(BookDetail { book })))
}

pub async fn update_book(
    State(store): State<SharedStore>,
    Path(book_id): Path<String>,
    payload: Result<Json<ShelfBookDraft>, JsonRejection>,
) -> Result<Reply<()>, AppError> {
    let Json(draft) = payload?;

    store
        .write()
        .await
        .update(&book_id, draft)
        .map_err(|err| reject(Action::Update, err, TITLE_FIELD))?;

    tracing::info!(book_id = %book_id, "shelf book updated");
    Ok(ok(ApiResponse::message("Buku berhasil diperbarui")))
}

pub async fn delete_book(
    State(store): State<SharedStore>,
    Path(book_id): Path<String>,
) -> Result<Reply<()>, AppError> {
    store
        .write()
        .await
        .delete(&book_id)
        .map_err(|err| reject(Action::Delete, err, TITLE_FIELD))?;

    tracing::info!(book_id = %book_id, "shelf book deleted");
    Ok(ok(ApiResponse::message("Buku berhasil dihapus")))
}
