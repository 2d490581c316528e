//! Library module: the full book record with reading progress, served under
//! `/books`.

pub mod handlers;
pub mod models;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use bookshelf_kernel::{InitCtx, Module};
use bookshelf_store::BookStore;
use tokio::sync::RwLock;

use models::Book;

pub type SharedStore = Arc<RwLock<BookStore<Book>>>;

pub struct LibraryModule {
    store: SharedStore,
}

impl LibraryModule {
    pub fn new() -> Self {
        Self::with_store(SharedStore::default())
    }

    /// Share an existing store, e.g. to inspect it from tests.
    pub fn with_store(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Default for LibraryModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for LibraryModule {
    fn name(&self) -> &'static str {
        "library"
    }

    fn base_path(&self) -> String {
        "/books".to_string()
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "library module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(handlers::list_books).post(handlers::create_book))
            .route("/health", get(health_check))
            .route(
                "/{book_id}",
                get(handlers::get_book)
                    .put(handlers::update_book)
                    .delete(handlers::delete_book),
            )
            .with_state(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List books as {id, name, publisher}",
                        "tags": ["Library"],
                        "responses": {
                            "200": { "description": "Envelope with data.books" }
                        }
                    },
                    "post": {
                        "summary": "Add a book",
                        "tags": ["Library"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/LibraryBookInput" }
                                }
                            }
                        },
                        "responses": {
                            "201": { "description": "Envelope with data.bookId" },
                            "400": {
                                "description": "Missing name or readPage > pageCount",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Fail" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{bookId}": {
                    "get": {
                        "summary": "Book detail",
                        "tags": ["Library"],
                        "responses": {
                            "200": { "description": "Envelope with data.book" },
                            "404": { "description": "Unknown id" }
                        }
                    },
                    "put": {
                        "summary": "Replace a book's fields",
                        "tags": ["Library"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/LibraryBookInput" }
                                }
                            }
                        },
                        "responses": {
                            "200": { "description": "Updated" },
                            "400": { "description": "Missing name or readPage > pageCount" },
                            "404": { "description": "Unknown id" }
                        }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Library"],
                        "responses": {
                            "200": { "description": "Deleted" },
                            "404": { "description": "Unknown id" }
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Library health check",
                        "tags": ["Library"],
                        "responses": { "200": { "description": "OK" } }
                    }
                }
            },
            "components": {
                "schemas": {
                    "LibraryBookInput": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "year": { "type": "integer" },
                            "author": { "type": "string" },
                            "summary": { "type": "string" },
                            "publisher": { "type": "string" },
                            "pageCount": { "type": "integer", "minimum": 0 },
                            "readPage": { "type": "integer", "minimum": 0 },
                            "reading": { "type": "boolean" }
                        },
                        "required": ["name"]
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let dropped = self.store.read().await.len();
        tracing::info!(module = self.name(), dropped, "library module stopped");
        Ok(())
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "library module is healthy"
}

pub fn create_module() -> Arc<dyn Module> {
    Arc::new(LibraryModule::new())
}
