use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use wallpath_app::adapters::inbound::router;
use wallpath_app::adapters::outbound::{init_noop_logger, InMemoryTrajectoryStore};
use wallpath_app::application::TrajectoryService;

const REQUEST: &str = r#"{
    "wall_dimensions": {"width": 5.0, "height": 5.0},
    "obstacles": [{"bottom_left": {"x": 1.0, "y": 1.0}, "dimensions": {"width": 1.0, "height": 1.0}}]
}"#;

fn app() -> axum::Router {
    let service = TrajectoryService::new(Arc::new(InMemoryTrajectoryStore::new()), init_noop_logger(), 0.1);
    router(Arc::new(service))
}

fn post(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_post_returns_created_record() {
    let response = app()
        .oneshot(post("/api/v1/trajectories/?tool_width=1.0", REQUEST))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["wall_dimensions"]["width"], 5.0);
    assert_eq!(body["obstacles"][0]["bottom_left"]["x"], 1.0);
    assert_eq!(body["path"][0], serde_json::json!({"x": 0.0, "y": 0.0}));
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_get_returns_stored_record_and_404_for_unknown_id() {
    let app = app();

    let created = app
        .clone()
        .oneshot(post("/api/v1/trajectories/?tool_width=1.0", REQUEST))
        .await
        .unwrap();
    let created = json_body(created).await;

    let found = app.clone().oneshot(get("/api/v1/trajectories/1")).await.unwrap();
    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(json_body(found).await["path"], created["path"]);

    let missing = app.oneshot(get("/api/v1/trajectories/99999")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(missing).await, serde_json::json!({"detail": "Trajectory not found"}));
}

#[tokio::test]
async fn test_invalid_geometry_is_unprocessable() {
    let response = app()
        .oneshot(post("/api/v1/trajectories/?tool_width=0", REQUEST))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["detail"].as_str().unwrap().contains("tool_width"));
}
