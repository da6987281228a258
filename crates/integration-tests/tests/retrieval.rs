//! Deferred retrieval endpoints.

use std::time::{Duration, Instant};

use bookshelf_integration_tests::{TestContext, json_body};
use reqwest::StatusCode;

#[tokio::test]
async fn test_all_books() {
    let ctx = TestContext::spawn().await;

    let resp = ctx.get("/allbooks").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["message"], "List of all books");
    assert_eq!(body["data"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn test_book_by_isbn() {
    let ctx = TestContext::spawn().await;

    let body = json_body(ctx.get("/getbooksbyisbn/isbn/9780316769488").await).await;
    assert_eq!(body["message"], "Book found for ISBN 9780316769488");
    assert_eq!(body["data"]["title"], "The Catcher in the Rye");

    let resp = ctx.get("/getbooksbyisbn/isbn/123").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["message"], "Book not found");
}

#[tokio::test]
async fn test_delay_is_applied() {
    let delay = Duration::from_millis(300);
    let ctx = TestContext::spawn_with(|config| config.retrieval_delay = delay).await;

    let started = Instant::now();
    let resp = ctx.get("/allbooks").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(started.elapsed() >= delay);
}

#[tokio::test]
async fn test_read_observes_writes_made_during_delay() {
    let ctx = TestContext::spawn_with(|config| {
        config.retrieval_delay = Duration::from_millis(500);
    })
    .await;

    let pending = ctx.get("/allbooks");
    let write = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        ctx.post_json(
            "/books/2/review",
            &serde_json::json!({"comment": "Written while waiting."}),
        )
        .await
    };

    let (resp, written) = tokio::join!(pending, write);
    assert_eq!(written.status(), StatusCode::CREATED);

    let body = json_body(resp).await;
    assert_eq!(body["data"][1]["reviews"].as_array().map(Vec::len), Some(3));
}
