use super::helpers::{
    create_scream, delete, expect_status, get, post_json, read_json, send, spawn_app, token_for,
};
use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::test]
async fn create_returns_scream_with_zeroed_counters() {
    let app = spawn_app();

    let req = post_json(
        "/api/v1/screams",
        Some(&token_for("alice")),
        &json!({ "body": "hello" }),
    );
    let res = expect_status(send(&app.app, req).await, StatusCode::OK).await;
    let payload: Value = read_json(res).await;

    assert!(payload["screamId"].as_str().is_some());
    assert_eq!(payload["body"], "hello");
    assert_eq!(payload["userHandle"], "alice");
    assert_eq!(payload["userImage"], "https://img.test/alice.png");
    assert_eq!(payload["likeCount"], 0);
    assert_eq!(payload["commentCount"], 0);
    assert!(payload["createdAt"].as_str().is_some());
}

#[tokio::test]
async fn create_with_whitespace_only_body_is_rejected() {
    let app = spawn_app();

    let req = post_json(
        "/api/v1/screams",
        Some(&token_for("alice")),
        &json!({ "body": "  " }),
    );
    let res = expect_status(send(&app.app, req).await, StatusCode::BAD_REQUEST).await;
    let payload: Value = read_json(res).await;
    assert!(payload["error"].as_str().is_some());
}

#[tokio::test]
async fn create_without_token_is_forbidden() {
    let app = spawn_app();

    let req = post_json("/api/v1/screams", None, &json!({ "body": "hello" }));
    expect_status(send(&app.app, req).await, StatusCode::FORBIDDEN).await;
}

#[tokio::test]
async fn list_returns_screams_newest_first() {
    let app = spawn_app();

    let first = create_scream(&app.app, "alice", "first scream").await;
    let second = create_scream(&app.app, "alice", "second scream").await;

    let res = expect_status(send(&app.app, get("/api/v1/screams")).await, StatusCode::OK).await;
    let payload: Value = read_json(res).await;
    let screams = payload.as_array().expect("list should be a JSON array");

    assert_eq!(screams.len(), 2);
    assert_eq!(screams[0]["screamId"], second.to_string());
    assert_eq!(screams[1]["screamId"], first.to_string());
    // List view carries no embedded comments.
    assert!(screams[0].get("comments").is_none());
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let app = spawn_app();

    let res = send(&app.app, get("/api/v1/screams")).await;
    let header = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("response should carry an x-request-id header");
    assert!(
        Uuid::parse_str(header).is_ok(),
        "request id should be a UUID, got {header}"
    );
}

#[tokio::test]
async fn get_missing_scream_is_not_found() {
    let app = spawn_app();

    let uri = format!("/api/v1/screams/{}", Uuid::now_v7());
    expect_status(send(&app.app, get(&uri)).await, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn get_embeds_comments_newest_first() {
    let app = spawn_app();

    let id = create_scream(&app.app, "alice", "discuss").await;
    for body in ["first", "second", "third"] {
        let req = post_json(
            &format!("/api/v1/screams/{id}/comments"),
            Some(&token_for("bob")),
            &json!({ "body": body }),
        );
        expect_status(send(&app.app, req).await, StatusCode::OK).await;
    }

    let res = expect_status(
        send(&app.app, get(&format!("/api/v1/screams/{id}"))).await,
        StatusCode::OK,
    )
    .await;
    let payload: Value = read_json(res).await;

    assert_eq!(payload["screamId"], id.to_string());
    assert_eq!(payload["commentCount"], 3);
    let comments = payload["comments"]
        .as_array()
        .expect("detail should embed a comments array");
    let bodies: Vec<&str> = comments
        .iter()
        .map(|c| c["body"].as_str().expect("comment body"))
        .collect();
    assert_eq!(bodies, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn delete_by_non_owner_is_forbidden() {
    let app = spawn_app();

    let id = create_scream(&app.app, "alice", "mine").await;
    let req = delete(&format!("/api/v1/screams/{id}"), Some(&token_for("bob")));
    expect_status(send(&app.app, req).await, StatusCode::FORBIDDEN).await;

    // Still there.
    expect_status(
        send(&app.app, get(&format!("/api/v1/screams/{id}"))).await,
        StatusCode::OK,
    )
    .await;
}

#[tokio::test]
async fn delete_of_missing_scream_is_not_found() {
    let app = spawn_app();

    let req = delete(
        &format!("/api/v1/screams/{}", Uuid::now_v7()),
        Some(&token_for("alice")),
    );
    expect_status(send(&app.app, req).await, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn delete_by_owner_cascades_to_comments_and_likes() {
    let app = spawn_app();

    let id = create_scream(&app.app, "alice", "short-lived").await;

    let comment_req = post_json(
        &format!("/api/v1/screams/{id}/comments"),
        Some(&token_for("bob")),
        &json!({ "body": "soon gone" }),
    );
    expect_status(send(&app.app, comment_req).await, StatusCode::OK).await;

    let like_req = super::helpers::post_empty(
        &format!("/api/v1/screams/{id}/like"),
        Some(&token_for("bob")),
    );
    expect_status(send(&app.app, like_req).await, StatusCode::OK).await;

    let req = delete(&format!("/api/v1/screams/{id}"), Some(&token_for("alice")));
    let res = expect_status(send(&app.app, req).await, StatusCode::OK).await;
    let payload: Value = read_json(res).await;
    assert_eq!(payload["message"], "Scream deleted successfully");

    expect_status(
        send(&app.app, get(&format!("/api/v1/screams/{id}"))).await,
        StatusCode::NOT_FOUND,
    )
    .await;

    // No orphaned records survive the cascade.
    assert!(app.store.comments_for(id).is_empty());
    assert!(app.store.like_pairs_for(id).is_empty());
}
