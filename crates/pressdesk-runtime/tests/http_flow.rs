//! Dashboard and preview flows against a mock article service.

use mockito::Matcher;
use pressdesk_client::{ClientConfig, HttpArticleClient};
use pressdesk_runtime::{
    Dashboard, Decision, MutationOutcome, PaginationStrategy, Preview,
};
use pressdesk_types::{ArticleId, Tab};
use serde_json::json;

fn client(server: &mockito::Server) -> HttpArticleClient {
    HttpArticleClient::new(ClientConfig::new(format!("{}/article", server.url()))).unwrap()
}

fn listing() -> String {
    json!([
        {"id": 1, "title": "A", "content": "a", "category": "news", "status": "publish"},
        {"id": 2, "title": "B", "content": "b", "category": "news", "status": "draft",
         "created_date": "2024-02-03T04:05:06Z"}
    ])
    .to_string()
}

#[tokio::test]
async fn trash_confirmed_refetches_once() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/article/limit/1000/0")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(listing())
        .expect(2)
        .create_async()
        .await;
    let trash = server
        .mock("PUT", "/article/2")
        .match_body(Matcher::Json(json!({"status": "trashed"})))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let mut dashboard = Dashboard::new(client(&server));
    dashboard.refresh().await.unwrap();
    dashboard.select_tab(Tab::Drafts);
    assert_eq!(dashboard.visible()[0].created_date, "3/2/2024, 04.05.06");

    let request = dashboard.request_trash(ArticleId::from(2));
    let outcome = dashboard.resolve(request, Decision::Confirm).await;

    assert_eq!(outcome, MutationOutcome::Applied);
    trash.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn failed_delete_does_not_refetch() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/article/limit/1000/0")
        .with_status(200)
        .with_body(listing())
        .expect(1)
        .create_async()
        .await;
    server
        .mock("DELETE", "/article/77")
        .with_status(404)
        .with_body(r#"{"error": "article 77 does not exist"}"#)
        .create_async()
        .await;

    let mut dashboard = Dashboard::new(client(&server));
    dashboard.refresh().await.unwrap();

    let request = dashboard.request_delete(ArticleId::from(77));
    let outcome = dashboard.resolve(request, Decision::Confirm).await;

    assert!(matches!(outcome, MutationOutcome::Failed(_)));
    assert_eq!(dashboard.articles().len(), 2);
    assert_eq!(
        dashboard.error(),
        Some("[API Error] Failed to delete article permanently: article 77 does not exist")
    );
    list.assert_async().await;
}

#[tokio::test]
async fn listing_failure_uses_generic_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/article/limit/1000/0")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let mut dashboard = Dashboard::new(client(&server));
    assert!(dashboard.refresh().await.is_err());
    assert_eq!(
        dashboard.error(),
        Some("Failed to fetch articles: Failed to fetch articles. Status: 500")
    );
}

#[tokio::test]
async fn coarse_preview_asks_for_offset_batches() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("GET", "/article/limit/1000/0")
        .with_status(200)
        .with_body(listing())
        .expect(1)
        .create_async()
        .await;

    let mut preview = Preview::new(client(&server)).with_strategy(PaginationStrategy::CoarseOffset);
    preview.load_page(1).await.unwrap();

    assert_eq!(preview.articles().len(), 1);
    assert_eq!(preview.articles()[0].id, ArticleId::from(1));
    assert!(!preview.cursor().has_next());
    first.assert_async().await;
}
