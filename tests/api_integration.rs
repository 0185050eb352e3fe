//! Integration tests for the HTTP API
//!
//! Drives the router with oneshot requests; state is shared through cloned
//! routers so multi-step flows exercise the same store.

use tidemark::core::create_router;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;
use serde_json::Value;

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["entry_count"], 0);
}

#[tokio::test]
async fn test_create_entry_classifies_text() {
    let app = create_router();

    let response = app
        .oneshot(post_json(
            "/entries",
            r#"{"text": "I love this wonderful sunny day"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["predicted_emotion"], "joy");
}

#[tokio::test]
async fn test_create_entry_rejects_empty_text() {
    let app = create_router();

    let response = app
        .oneshot(post_json("/entries", r#"{"text": "   "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_entry_history_is_newest_first() {
    let app = create_router();

    for text in ["first entry text", "second entry text"] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/entries",
                &format!(r#"{{"text": "{}"}}"#, text),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/entries")).await.unwrap();
    let json = body_json(response).await;

    let history = json.as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["text"], "second entry text");
    assert_eq!(history[1]["text"], "first entry text");
}

#[tokio::test]
async fn test_streak_starts_at_one() {
    let app = create_router();

    app.clone()
        .oneshot(post_json("/entries", r#"{"text": "a quiet evening"}"#))
        .await
        .unwrap();

    let response = app.oneshot(get("/stats")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["streak"], 1);
}

#[tokio::test]
async fn test_insights_placeholder_below_threshold() {
    let app = create_router();

    app.clone()
        .oneshot(post_json("/entries", r#"{"text": "coffee with my boss"}"#))
        .await
        .unwrap();

    let response = app.oneshot(get("/insights")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let insights = json["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 1);
    assert!(insights[0]
        .as_str()
        .unwrap()
        .contains("at least 10 entries"));
}

#[tokio::test]
async fn test_suggestion_needs_history() {
    let app = create_router();

    let response = app.clone().oneshot(get("/suggestion")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["suggestion"], "Keep journaling...");

    for _ in 0..3 {
        app.clone()
            .oneshot(post_json("/entries", r#"{"text": "long day at work"}"#))
            .await
            .unwrap();
    }

    let response = app.oneshot(get("/suggestion")).await.unwrap();
    let json = body_json(response).await;
    let suggestion = json["suggestion"].as_str().unwrap();
    assert!(!suggestion.is_empty());
    assert_ne!(suggestion, "Keep journaling...");
}

#[tokio::test]
async fn test_goal_lifecycle() {
    let app = create_router();

    // Create
    let response = app
        .clone()
        .oneshot(post_json(
            "/goals",
            r#"{"suggestion_text": "Take a short walk each morning"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Goal created!");
    let goal_id = json["goal_id"].as_str().unwrap().to_string();
    assert!(goal_id.starts_with("goal_"));

    // Listed as pending
    let response = app.clone().oneshot(get("/goals")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json[0]["status"], "pending");

    // Complete
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/goals/{}/complete", goal_id),
            "{}",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/goals")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json[0]["status"], "completed");

    // Delete
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/goals/{}", goal_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/goals")).await.unwrap();
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_goal_rejects_empty_text() {
    let app = create_router();

    let response = app
        .oneshot(post_json("/goals", r#"{"suggestion_text": ""}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_goal_is_not_found() {
    let app = create_router();

    let response = app
        .clone()
        .oneshot(post_json("/goals/goal_missing/complete", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/goals/goal_missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_insight_flow_over_threshold() {
    let app = create_router();

    // Ten entries drifting from love to hate of the same topic; the store
    // keeps arrival order, which is ascending here
    for _ in 0..5 {
        app.clone()
            .oneshot(post_json(
                "/entries",
                r#"{"text": "I love my job and my boss"}"#,
            ))
            .await
            .unwrap();
    }
    for _ in 0..5 {
        app.clone()
            .oneshot(post_json(
                "/entries",
                r#"{"text": "I hate my job and my boss, so sad I cried"}"#,
            ))
            .await
            .unwrap();
    }

    let response = app.oneshot(get("/insights")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let insights = json["insights"].as_array().unwrap();
    assert!(!insights.is_empty());
    assert!(insights.len() <= 5);
    assert!(insights
        .iter()
        .any(|i| i.as_str().unwrap().contains("'Work & Career'")));
}
