use std::sync::Arc;

use poem::{http::StatusCode, test::TestClient};
use reading_progress::{build_app, storage::MemoryBookStore};
use serde_json::json;

fn client() -> TestClient<impl poem::Endpoint> {
    let store = Arc::new(MemoryBookStore::new());
    TestClient::new(build_app(store, "http://localhost:8080"))
}

fn zhivago() -> serde_json::Value {
    json!({
        "id": 1234,
        "title": "Doctor Zhivago",
        "author": "Boris Pasternak",
        "published": "1957-11-23",
        "page": 2
    })
}

#[tokio::test]
async fn reading_list_lifecycle() {
    let cli = client();

    let resp = cli.post("/users/1/books").body_json(&zhivago()).send().await;
    resp.assert_status(StatusCode::CREATED);
    resp.assert_json(zhivago()).await;

    let resp = cli.get("/users/1/books").send().await;
    resp.assert_status_is_ok();
    resp.assert_json(json!([zhivago()])).await;

    let resp = cli
        .put("/users/1/books/1234")
        .body_json(&json!({ "page": 25 }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let mut updated = zhivago();
    updated["page"] = json!(25);
    resp.assert_json(&updated).await;

    let resp = cli.get("/users/1/books/1234").send().await;
    resp.assert_status_is_ok();
    resp.assert_json(&updated).await;

    let resp = cli.delete("/users/1/books/1234").send().await;
    resp.assert_status(StatusCode::NO_CONTENT);

    let resp = cli.get("/users/1/books/1234").send().await;
    resp.assert_status(StatusCode::NOT_FOUND);
    resp.assert_json(json!({
        "status_code": 404,
        "message": "book 1234 not found for user 1"
    }))
    .await;
}

#[tokio::test]
async fn duplicate_add_is_conflict() {
    let cli = client();
    cli.post("/users/1/books")
        .body_json(&zhivago())
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    let mut again = zhivago();
    again["page"] = json!(400);
    let resp = cli.post("/users/1/books").body_json(&again).send().await;
    resp.assert_status(StatusCode::CONFLICT);
    resp.assert_json(json!({
        "status_code": 409,
        "message": "user 1 is already reading the book with id 1234"
    }))
    .await;

    let resp = cli.get("/users/1/books/1234").send().await;
    resp.assert_json(zhivago()).await;
}

#[tokio::test]
async fn unknown_user_lists_empty() {
    let cli = client();
    let resp = cli.get("/users/99/books").send().await;
    resp.assert_status_is_ok();
    resp.assert_json(json!([])).await;
}

#[tokio::test]
async fn missing_user_is_not_found_everywhere() {
    let cli = client();
    let expected = json!({ "status_code": 404, "message": "user 5 not found" });

    let resp = cli.get("/users/5/books/1").send().await;
    resp.assert_status(StatusCode::NOT_FOUND);
    resp.assert_json(&expected).await;

    let resp = cli
        .put("/users/5/books/1")
        .body_json(&json!({ "page": 3 }))
        .send()
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
    resp.assert_json(&expected).await;

    let resp = cli.delete("/users/5/books/1").send().await;
    resp.assert_status(StatusCode::NOT_FOUND);
    resp.assert_json(&expected).await;
}

#[tokio::test]
async fn malformed_body_never_reaches_store() {
    let cli = client();
    let resp = cli
        .post("/users/1/books")
        .body_json(&json!({ "id": "not a number" }))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    cli.get("/users/1/books")
        .send()
        .await
        .assert_json(json!([]))
        .await;
}

#[tokio::test]
async fn health_reports_counts() {
    let cli = client();
    cli.post("/users/1/books")
        .body_json(&zhivago())
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    let resp = cli.get("/health").send().await;
    resp.assert_status_is_ok();
    resp.assert_json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "users": 1,
        "books": 1
    }))
    .await;
}
