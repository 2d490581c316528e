use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use bookshelf_http::{
    error::AppError,
    response::{created, ok, ApiResponse, Reply},
};
use bookshelf_store::BookId;
use serde::Serialize;

use super::models::{Book, BookDraft, BookSummary};
use super::SharedStore;
use crate::modules::feedback::{reject, Action};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Created {
    pub book_id: BookId,
}

#[derive(Debug, Serialize)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

#[derive(Debug, Serialize)]
pub struct BookDetail {
    pub book: Book,
}

const TITLE_FIELD: &str = "nama";

pub async fn create_book(
    State(store): State<SharedStore>,
    payload: Result<Json<BookDraft>, JsonRejection>,
) -> Result<Reply<Created>, AppError> {
    let Json(draft) = payload?;

    let book_id = store
        .write()
        .await
        .create(draft)
        .map_err(|err| reject(Action::Add, err, TITLE_FIELD))?;

    tracing::info!(book_id = %book_id, "library book added");
    Ok(created(
        ApiResponse::success(Created { book_id }).with_message("Buku berhasil ditambahkan"),
    ))
}

pub async fn list_books(State(store): State<SharedStore>) -> Reply<BookList> {
    let books = store.read().await.list().map(BookSummary::from).collect();
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
    payload: Result<Json<BookDraft>, JsonRejection>,
) -> Result<Reply<()>, AppError> {
    let Json(draft) = payload?;

    store
        .write()
        .await
        .update(&book_id, draft)
        .map_err(|err| reject(Action::Update, err, TITLE_FIELD))?;

    tracing::info!(book_id = %book_id, "library book updated");
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

    tracing::info!(book_id = %book_id, "library book deleted");
    Ok(ok(ApiResponse::message("Buku berhasil dihapus")))
}
