mod common;

use axum::http::{Method, StatusCode};
use common::{app, send};
use serde_json::{json, Value};

async fn add(app: &axum::Router, title: &str, is_read: bool) -> String {
    let body = json!({"title": title, "author": "Anon", "year": 2001, "isRead": is_read});
    let (status, response) = send(app, Method::POST, "/api/books", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{response}");
    response["data"]["bookId"].as_str().unwrap().to_string()
}

fn titles(body: &Value) -> Vec<&str> {
    body["data"]["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|book| book["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn list_returns_full_records() {
    let app = app();
    let id = add(&app, "Dune", true).await;

    let (status, body) = send(&app, Method::GET, "/api/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["books"],
        json!([{"id": id, "title": "Dune", "author": "Anon", "year": 2001, "isRead": true}])
    );
}

#[tokio::test]
async fn title_query_filters_case_insensitively() {
    let app = app();
    add(&app, "Dune", false).await;
    add(&app, "Emma", false).await;
    add(&app, "Dune Messiah", true).await;

    let (_, body) = send(&app, Method::GET, "/api/books?title=dUNe", None).await;
    assert_eq!(titles(&body), vec!["Dune", "Dune Messiah"]);

    let (_, body) = send(&app, Method::GET, "/api/books", None).await;
    assert_eq!(titles(&body), vec!["Dune", "Emma", "Dune Messiah"]);
}

#[tokio::test]
async fn missing_title_is_rejected() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/books",
        Some(json!({"author": "Anon", "year": 2001})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"status": "fail", "message": "Gagal menambahkan buku. Mohon isi judul buku"})
    );
}

#[tokio::test]
async fn mark_as_read_by_id() {
    let app = app();
    let id = add(&app, "Dune", false).await;
    let uri = format!("/api/books/{id}");

    let update = json!({"title": "Dune", "author": "Anon", "year": 2001, "isRead": true});
    let (status, _) = send(&app, Method::PUT, &uri, Some(update)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(body["data"]["book"]["isRead"], true);
}

#[tokio::test]
async fn duplicate_titles_stay_distinct_by_id() {
    let app = app();
    let first = add(&app, "Dune", false).await;
    let second = add(&app, "Dune", false).await;
    assert_ne!(first, second);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/books/{first}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/api/books", None).await;
    assert_eq!(body["data"]["books"][0]["id"], second);
}

#[tokio::test]
async fn delete_twice_is_200_then_404() {
    let app = app();
    let id = add(&app, "Dune", false).await;
    let uri = format!("/api/books/{id}");

    assert_eq!(send(&app, Method::DELETE, &uri, None).await.0, StatusCode::OK);
    assert_eq!(
        send(&app, Method::DELETE, &uri, None).await.0,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn modules_do_not_share_stores() {
    let app = app();
    add(&app, "Dune", false).await;

    let (_, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(body["data"]["books"], json!([]));
}

#[tokio::test]
async fn openapi_lists_both_modules() {
    let (status, spec) = send(&app(), Method::GET, "/docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(spec["paths"]["/books"]["post"].is_object());
    assert!(spec["paths"]["/books/{bookId}"]["put"].is_object());
    assert!(spec["paths"]["/api/books"]["get"].is_object());
}

#[tokio::test]
async fn form_string_years_are_accepted() {
    let app = app();
    let body = json!({"title": "Dune", "author": "Herbert", "year": "1965", "isRead": false});
    let (status, response) = send(&app, Method::POST, "/api/books", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{response}");
    let id = response["data"]["bookId"].as_str().unwrap().to_string();

    let update = json!({"title": "Dune", "author": "Herbert", "year": "1966", "isRead": true});
    let uri = format!("/api/books/{id}");
    let (status, _) = send(&app, Method::PUT, &uri, Some(update)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(body["data"]["book"]["year"], 1966);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"title": "Emma", "year": "not a year"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[test]
fn modules_register_under_their_own_names() {
    let mut registry = bookshelf_kernel::ModuleRegistry::new();
    bookshelf_app::register_all(&mut registry);

    let shelf = registry.get_module("shelf").unwrap();
    assert_eq!(shelf.base_path(), "/api/books");
    let library = registry.get_module("library").unwrap();
    assert_eq!(library.base_path(), "/books");
}
