//! `trash` and `delete`: confirmation, single re-fetch, failure banner.

use mockito::Matcher;
use pressdesk_testing::fixtures::mixed_collection;
use pressdesk_testing::{TestWorld, assertions};
use serde_json::json;

fn listing_body() -> String {
    serde_json::to_string(&mixed_collection()).unwrap()
}

#[test]
fn trash_with_yes_updates_status_then_refetches_once() {
    let mut world = TestWorld::new();
    let trash = world
        .server()
        .mock("PUT", "/article/2")
        .match_body(Matcher::Json(json!({"status": "trashed"})))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create();
    let listing = world
        .server()
        .mock("GET", "/article/limit/1000/0")
        .with_status(200)
        .with_body(listing_body())
        .expect(1)
        .create();

    let result = world
        .run(&["--format", "json", "trash", "2", "--yes"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["action"], "trash");
    assert_eq!(json["content"]["outcome"], "applied");
    assert_eq!(json["content"]["id"], 2);
    assertions::assert_counts(&json, 2, 1, 1).unwrap();

    trash.assert();
    listing.assert();
}

#[test]
fn trash_applied_but_relisting_fails_reports_banner_without_counts() {
    let mut world = TestWorld::new();
    let trash = world
        .server()
        .mock("PUT", "/article/2")
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create();
    let _listing = world.serve_error("GET", "/article/limit/1000/0", 500, "database offline");

    let result = world
        .run(&["--format", "json", "trash", "2", "--yes"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["badge"]["level"], "warning");
    assert_eq!(json["badge"]["label"], "Moved to trash; list not reloaded");
    assert_eq!(json["content"]["outcome"], "applied");
    assert_eq!(
        json["content"]["refresh_error"],
        "Failed to fetch articles: database offline"
    );
    assert!(json["content"].get("counts").is_none());

    trash.assert();
}

#[test]
fn trash_declined_at_prompt_sends_nothing() {
    let mut world = TestWorld::new();
    let trash = world
        .server()
        .mock("PUT", "/article/2")
        .expect(0)
        .create();
    let listing = world
        .server()
        .mock("GET", "/article/limit/1000/0")
        .expect(0)
        .create();

    let result = world.run_with_stdin(&["trash", "2"], "n\n").unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(
        result
            .stderr()
            .contains("Are you sure you want to move this article to the trash? [y/N]")
    );
    assert!(result.stdout().contains("Cancelled; article 2 left unchanged."));

    trash.assert();
    listing.assert();
}

#[test]
fn delete_confirmed_at_prompt() {
    let mut world = TestWorld::new();
    let delete = world
        .server()
        .mock("DELETE", "/article/3")
        .with_status(204)
        .expect(1)
        .create();
    let _listing = world.serve_articles(&mixed_collection());

    let result = world.run_with_stdin(&["delete", "3"], "yes\n").unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stderr().contains("WARNING: deleting this article is permanent."));
    assert!(result.stdout().contains("Article 3 deleted permanently."));

    delete.assert();
}

#[test]
fn delete_unknown_id_surfaces_server_reason_without_refetch() {
    let mut world = TestWorld::new();
    let _delete = world.serve_error("DELETE", "/article/77", 404, "article 77 does not exist");
    let listing = world
        .server()
        .mock("GET", "/article/limit/1000/0")
        .expect(0)
        .create();

    let result = world.run(&["delete", "77", "--yes"]).unwrap();
    assert!(!result.success());
    assert!(
        result.stderr().contains(
            "Error: [API Error] Failed to delete article permanently: article 77 does not exist"
        ),
        "stderr: {}",
        result.stderr()
    );

    listing.assert();
}

#[test]
fn failed_trash_reports_generic_message_when_body_is_empty() {
    let mut world = TestWorld::new();
    let _trash = world
        .server()
        .mock("PUT", "/article/5")
        .with_status(500)
        .create();

    let result = world.run(&["trash", "5", "-y"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains(
        "[API Error] Failed to move article to trash: Failed to update article. Status: 500"
    ));
}
