//! Shelf module: minimal title/author/year/read-flag records served under
//! `/api/books`.

pub mod handlers;
pub mod models;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use bookshelf_kernel::{InitCtx, Module};
use bookshelf_store::BookStore;
use tokio::sync::RwLock;

use models::ShelfBook;

pub type SharedStore = Arc<RwLock<BookStore<ShelfBook>>>;

pub struct ShelfModule {
    store: SharedStore,
}

impl ShelfModule {
    pub fn new() -> Self {
        Self::with_store(SharedStore::default())
    }

    pub fn with_store(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Default for ShelfModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for ShelfModule {
    fn name(&self) -> &'static str {
        "shelf"
    }

    fn base_path(&self) -> String {
        "/api/books".to_string()
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "shelf module initialized"
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
                        "summary": "List shelf books",
                        "tags": ["Shelf"],
                        "parameters": [{
                            "name": "title",
                            "in": "query",
                            "required": false,
                            "description": "Case-insensitive title substring",
                            "schema": { "type": "string" }
                        }],
                        "responses": {
                            "200": {
                                "description": "Envelope with data.books",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/ShelfBook" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "summary": "Add a shelf book",
                        "tags": ["Shelf"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/ShelfBookInput" }
                                }
                            }
                        },
                        "responses": {
                            "201": { "description": "Envelope with data.bookId" },
                            "400": { "description": "Missing title" }
                        }
                    }
                },
                "/{bookId}": {
                    "get": {
                        "summary": "Shelf book detail",
                        "tags": ["Shelf"],
                        "responses": {
                            "200": { "description": "Envelope with data.book" },
                            "404": { "description": "Unknown id" }
                        }
                    },
                    "put": {
                        "summary": "Replace a shelf book's fields",
                        "tags": ["Shelf"],
                        "responses": {
                            "200": { "description": "Updated" },
                            "400": { "description": "Missing title" },
                            "404": { "description": "Unknown id" }
                        }
                    },
                    "delete": {
                        "summary": "Delete a shelf book",
                        "tags": ["Shelf"],
                        "responses": {
                            "200": { "description": "Deleted" },
                            "404": { "description": "Unknown id" }
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Shelf health check",
                        "tags": ["Shelf"],
                        "responses": { "200": { "description": "OK" } }
                    }
                }
            },
            "components": {
                "schemas": {
                    "ShelfBook": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "year": { "type": "integer" },
                            "isRead": { "type": "boolean" }
                        },
                        "required": ["id", "title", "author", "year", "isRead"]
                    },
                    "ShelfBookInput": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "year": { "type": "integer" },
                            "isRead": { "type": "boolean" }
                        },
                        "required": ["title"]
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let dropped = self.store.read().await.len();
        tracing::info!(module = self.name(), dropped, "shelf module stopped");
        Ok(())
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "shelf module is healthy"
}

pub fn create_module() -> Arc<dyn Module> {
    Arc::new(ShelfModule::new())
}
