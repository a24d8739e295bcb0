//! Integration tests for the prize wheel HTTP endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use wheel_api::router::build_router;
use wheel_api::state::AppState;
use wheel_core::assets::AssetSource;
use wheel_core::store::StateStore;
use wheel_types::GameState;

struct TestApp {
    state: Arc<AppState>,
    root: TempDir,
}

impl TestApp {
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let static_dir = root.path().join("static");
        let assets = AssetSource::new(
            static_dir.join("wheel_images"),
            "wheel_images",
            root.path().join("wheel_data.json"),
        );
        let store = Arc::new(StateStore::new(GameState::default()));
        let state = Arc::new(AppState::new(store, assets, static_dir));
        Self { state, root }
    }

    fn router(&self) -> Router {
        build_router(Arc::clone(&self.state))
    }

    fn image_dir(&self) -> std::path::PathBuf {
        self.root.path().join("static").join("wheel_images")
    }

    fn add_image(&self, name: &str) {
        std::fs::create_dir_all(self.image_dir()).unwrap();
        std::fs::write(self.image_dir().join(name), b"\x89PNG").unwrap();
    }

    fn write_overrides(&self, contents: &str) {
        std::fs::write(self.root.path().join("wheel_data.json"), contents).unwrap();
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let response = self
            .router()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, body_to_json(response.into_body()).await)
    }

    async fn post_raw(&self, body: &str) -> (StatusCode, Value) {
        let request = Request::post("/api/send_command")
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap();
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        (status, body_to_json(response.into_body()).await)
    }

    async fn send(&self, body: &Value) -> (StatusCode, Value) {
        self.post_raw(&body.to_string()).await
    }
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

fn assert_dir_exists(dir: &Path) {
    assert!(dir.is_dir(), "expected {} to exist", dir.display());
}

// =========================================================================
// Pages
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let app = TestApp::new();

    for path in ["/", "/control"] {
        let response = app
            .router()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.contains("text/html"));
    }
}

async fn display_page(app: &TestApp) -> String {
    let response = app
        .router()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_display_returns_to_wheel_when_result_countdown_expires() {
    let app = TestApp::new();
    let page = display_page(&app).await;

    let countdown = page.find("function startResultCountdown").unwrap();
    let end = page.find("function resetDisplay").unwrap();
    assert!(page[countdown..end].contains("if (left <= 0) resetDisplay();"));
}

#[tokio::test]
async fn test_display_reloads_global_timer_when_duration_changes() {
    let app = TestApp::new();
    let page = display_page(&app).await;

    assert!(page.contains("previous.config.global_time_set !== next.config.global_time_set"));
}

// =========================================================================
// Status
// =========================================================================

#[tokio::test]
async fn test_check_status_initial_state() {
    let app = TestApp::new();
    let (status, json) = app.get("/api/check_status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "command_id": 0,
            "command": null,
            "scores": {"left": 0, "right": 0},
            "config": {
                "result_duration": 60,
                "global_time_set": 600,
                "global_timer_running": false
            }
        })
    );
}

#[tokio::test]
async fn test_check_status_is_idempotent() {
    let app = TestApp::new();
    app.send(&json!({"action": "spin"})).await;

    let (_, first) = app.get("/api/check_status").await;
    let (_, second) = app.get("/api/check_status").await;
    assert_eq!(first, second);
}

// =========================================================================
// Commands
// =========================================================================

#[tokio::test]
async fn test_spin_returns_success_and_new_state() {
    let app = TestApp::new();
    let (status, json) = app.send(&json!({"action": "spin"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["state"]["command"], "spin");
    assert!(json["state"]["command_id"].as_u64().unwrap() > 0);

    let (_, polled) = app.get("/api/check_status").await;
    assert_eq!(polled, json["state"]);
}

#[tokio::test]
async fn test_command_ids_strictly_increase() {
    let app = TestApp::new();
    let mut previous = 0;
    for _ in 0..20 {
        let (_, json) = app.send(&json!({"action": "reset"})).await;
        let id = json["state"]["command_id"].as_u64().unwrap();
        assert!(id > previous, "{id} should exceed {previous}");
        previous = id;
    }
}

#[tokio::test]
async fn test_update_score_clamps_at_zero() {
    let app = TestApp::new();
    app.send(&json!({"action": "update_score", "payload": {"side": "left", "change": 3}}))
        .await;
    let (status, json) = app
        .send(&json!({"action": "update_score", "payload": {"side": "left", "change": -5}}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"]["scores"]["left"], 0);
    assert_eq!(json["state"]["scores"]["right"], 0);
}

#[tokio::test]
async fn test_reset_scores() {
    let app = TestApp::new();
    app.send(&json!({"action": "update_score", "payload": {"side": "right", "change": 12}}))
        .await;
    let (_, json) = app.send(&json!({"action": "reset_scores"})).await;

    assert_eq!(json["state"]["scores"], json!({"left": 0, "right": 0}));
}

#[tokio::test]
async fn test_set_global_time_stops_running_timer() {
    let app = TestApp::new();
    app.send(&json!({"action": "control_global_timer", "payload": {"state": "start"}}))
        .await;
    let (_, json) = app
        .send(&json!({"action": "set_timers", "payload": {"global_time": 300}}))
        .await;

    assert_eq!(json["state"]["config"]["global_time_set"], 300);
    assert_eq!(json["state"]["config"]["global_timer_running"], false);
    assert_eq!(json["state"]["config"]["result_duration"], 60);
}

#[tokio::test]
async fn test_control_global_timer_unknown_state_stops() {
    let app = TestApp::new();
    let (_, started) = app
        .send(&json!({"action": "control_global_timer", "payload": {"state": "start"}}))
        .await;
    assert_eq!(started["state"]["config"]["global_timer_running"], true);

    let (status, json) = app
        .send(&json!({"action": "control_global_timer", "payload": {"state": "sideways"}}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"]["config"]["global_timer_running"], false);
}

#[tokio::test]
async fn test_unknown_action_is_rejected_without_side_effects() {
    let app = TestApp::new();
    app.send(&json!({"action": "spin"})).await;
    let (_, before) = app.get("/api/check_status").await;

    let (status, json) = app.send(&json!({"action": "nonsense"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"], "invalid_action");

    let (_, after) = app.get("/api/check_status").await;
    assert_eq!(after["command_id"], before["command_id"]);
    assert_eq!(after["command"], "spin");
}

#[tokio::test]
async fn test_invalid_side_is_rejected() {
    let app = TestApp::new();
    let (status, json) = app
        .send(&json!({"action": "update_score", "payload": {"side": "center", "change": 1}}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"], "invalid_payload");

    let (_, state) = app.get("/api/check_status").await;
    assert_eq!(state["command_id"], 0);
    assert!(state["command"].is_null());
}

#[tokio::test]
async fn test_missing_action_is_rejected() {
    let app = TestApp::new();
    let (status, json) = app.send(&json!({"payload": {}})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = TestApp::new();
    let (status, json) = app.post_raw("{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"], "malformed_body");
}

#[tokio::test]
async fn test_concurrent_score_updates_do_not_lose_increments() {
    let app = TestApp::new();
    let router = app.router();

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..25 {
        let router = router.clone();
        tasks.spawn(async move {
            let request = Request::post("/api/send_command")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"action": "update_score", "payload": {"side": "left", "change": 1}})
                        .to_string(),
                ))
                .unwrap();
            router.oneshot(request).await.unwrap().status()
        });
    }
    while let Some(status) = tasks.join_next().await {
        assert_eq!(status.unwrap(), StatusCode::OK);
    }

    let (_, state) = app.get("/api/check_status").await;
    assert_eq!(state["scores"]["left"], 25);
}

// =========================================================================
// Wheel data
// =========================================================================

#[tokio::test]
async fn test_wheel_data_empty_directory_is_created() {
    let app = TestApp::new();
    let (status, json) = app.get("/api/get_wheel_data").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
    assert_dir_exists(&app.image_dir());
}

#[tokio::test]
async fn test_wheel_data_sorted_with_overrides() {
    let app = TestApp::new();
    app.add_image("b.png");
    app.add_image("a.jpg");
    app.add_image("readme.txt");
    app.write_overrides(r#"{"a.jpg": "Grand Prize"}"#);

    let (status, json) = app.get("/api/get_wheel_data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            {"filename": "a.jpg", "path": "wheel_images/a.jpg", "text": "Grand Prize"},
            {"filename": "b.png", "path": "wheel_images/b.png", "text": "b"}
        ])
    );
}

#[tokio::test]
async fn test_wheel_data_ignores_malformed_overrides() {
    let app = TestApp::new();
    app.add_image("trip.gif");
    app.write_overrides("[[[");

    let (status, json) = app.get("/api/get_wheel_data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["text"], "trip");
}

#[tokio::test]
async fn test_wheel_data_keeps_string_overrides_next_to_odd_values() {
    let app = TestApp::new();
    app.add_image("car.jpg");
    app.add_image("boat.jpg");
    app.write_overrides(r#"{"car.jpg": "A Car", "boat.jpg": 7}"#);

    let (status, json) = app.get("/api/get_wheel_data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["text"], "boat");
    assert_eq!(json[1]["text"], "A Car");
}

#[tokio::test]
async fn test_wheel_image_is_served_from_static() {
    let app = TestApp::new();
    app.add_image("car.png");

    let response = app
        .router()
        .oneshot(
            Request::get("/static/wheel_images/car.png")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(bytes.as_ref(), b"\x89PNG");
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let app = TestApp::new();
    let response = app
        .router()
        .oneshot(
            Request::get("/api/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
