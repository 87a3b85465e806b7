//! `create` and `edit` through the article form rules.

use mockito::Matcher;
use pressdesk_testing::fixtures::mixed_collection;
use pressdesk_testing::{TestWorld, valid_fields};
use pressdesk_types::ArticleStatus;
use serde_json::json;

#[test]
fn create_publishes_by_default_and_refetches() {
    let mut world = TestWorld::new();
    let fields = valid_fields(ArticleStatus::Publish);
    let content_path = world.temp_dir().join("body.txt");
    std::fs::write(&content_path, &fields.content).unwrap();

    let create = world
        .server()
        .mock("POST", "/article/")
        .match_body(Matcher::Json(json!({
            "title": fields.title,
            "content": fields.content,
            "category": fields.category,
            "status": "publish",
        })))
        .with_status(201)
        .with_body("{}")
        .expect(1)
        .create();
    let _listing = world.serve_articles(&mixed_collection());

    let result = world
        .run(&[
            "--format",
            "json",
            "create",
            "--title",
            fields.title.as_str(),
            "--category",
            fields.category.as_str(),
            "--content-file",
            content_path.to_str().unwrap(),
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["action"], "created");
    assert_eq!(json["content"]["status"], "publish");
    create.assert();
}

#[test]
fn create_saved_but_relisting_fails_shows_banner() {
    let mut world = TestWorld::new();
    let fields = valid_fields(ArticleStatus::Draft);
    let _create = world
        .server()
        .mock("POST", "/article/")
        .with_status(201)
        .with_body("{}")
        .create();
    let _listing = world.serve_error("GET", "/article/limit/1000/0", 503, "database offline");

    let result = world
        .run(&[
            "create",
            "--title",
            fields.title.as_str(),
            "--category",
            fields.category.as_str(),
            "--content",
            fields.content.as_str(),
            "--draft",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Article created; list not reloaded"));
    assert!(
        result
            .stdout()
            .contains("Failed to fetch articles: database offline")
    );
    assert!(!result.stdout().contains("Now:"));
}

#[test]
fn create_rejects_short_title_without_calling_service() {
    let mut world = TestWorld::new();
    let create = world.server().mock("POST", "/article/").expect(0).create();

    let result = world
        .run(&[
            "create",
            "--title",
            "Too short",
            "--category",
            "news",
            "--content",
            "body",
            "--draft",
        ])
        .unwrap();
    assert!(!result.success());
    assert!(
        result
            .stderr()
            .contains("Error: Title must be at least 20 characters.")
    );
    create.assert();
}

#[test]
fn create_surfaces_api_error() {
    let mut world = TestWorld::new();
    let fields = valid_fields(ArticleStatus::Draft);
    let _create = world.serve_error("POST", "/article/", 400, "duplicate title");

    let result = world
        .run(&[
            "create",
            "--title",
            fields.title.as_str(),
            "--category",
            fields.category.as_str(),
            "--content",
            fields.content.as_str(),
            "--draft",
        ])
        .unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Error: [API Error] duplicate title"));
}

#[test]
fn edit_keeps_current_status_and_sends_all_fields() {
    let mut world = TestWorld::new();
    let article = mixed_collection().remove(1);
    let update = world
        .server()
        .mock("PUT", "/article/2")
        .match_body(Matcher::Json(json!({
            "title": "An entirely new headline here",
            "content": article.content,
            "category": article.category,
            "status": "draft",
        })))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create();
    let listing = world
        .server()
        .mock("GET", "/article/limit/1000/0")
        .with_status(200)
        .with_body(serde_json::to_string(&mixed_collection()).unwrap())
        .expect(2)
        .create();

    let result = world
        .run(&[
            "--format",
            "json",
            "edit",
            "2",
            "--title",
            "An entirely new headline here",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["action"], "updated");
    assert_eq!(json["content"]["id"], 2);
    update.assert();
    listing.assert();
}

#[test]
fn edit_unknown_id_fails_before_any_update() {
    let mut world = TestWorld::new();
    let _listing = world.serve_articles(&mixed_collection());
    let update = world.server().mock("PUT", Matcher::Any).expect(0).create();

    let result = world.run(&["edit", "42", "--publish"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Article not found: 42"));
    update.assert();
}
