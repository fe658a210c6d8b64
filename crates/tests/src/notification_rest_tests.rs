use crate::common::*;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

const INBOX: &str = "/api/workers/7/notifications";

/// POST creates an unread notification and returns it with 201.
#[tokio::test]
async fn create_returns_created_notification() {
    let (app, hub) = test_app();

    let body = json!({
        "type": "warning",
        "title": "Route updated",
        "message": "Stop 4 moved",
        "data": { "taskId": "t-88" }
    });
    let (status, resp) = post_json(&app, INBOX, &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp["type"], "warning");
    assert_eq!(resp["title"], "Route updated");
    assert_eq!(resp["read"], false);
    assert_eq!(resp["data"], json!({ "taskId": "t-88" }));
    assert!(resp["id"].as_str().is_some(), "id should be assigned");
    assert!(resp["createdAt"].as_str().is_some(), "createdAt should be set");

    assert_eq!(hub.unread_count(7), 1);
}

/// A blank title is rejected with 400 and a field error.
#[tokio::test]
async fn blank_title_is_bad_request() {
    let (app, hub) = test_app();

    let body = json!({ "type": "info", "title": "  ", "message": "nothing" });
    let (status, resp) = post_json(&app, INBOX, &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["kind"], "BadRequest");
    assert_eq!(resp["field_errors"]["title"], "must not be blank");
    assert!(hub.list(7).is_empty());
}

/// Unknown types fall back to info; both references resolve to the report.
#[tokio::test]
async fn create_normalizes_type_and_target() {
    let (app, _hub) = test_app();

    let body = json!({
        "type": "celebration",
        "title": "Report approved",
        "data": { "reportId": 311, "taskId": "t-1" }
    });
    let (status, resp) = post_json(&app, INBOX, &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp["type"], "info");
    assert_eq!(resp["message"], "");
    assert_eq!(resp["data"], json!({ "reportId": "311" }));
}

/// GET lists newest first and only for the addressed worker.
#[tokio::test]
async fn list_is_newest_first_and_per_worker() {
    let (app, _hub) = test_app();

    for title in ["first", "second"] {
        let body = json!({ "type": "info", "title": title });
        let (status, _) = post_json(&app, INBOX, &body.to_string()).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let other = json!({ "type": "info", "title": "someone else" });
    post_json(&app, "/api/workers/8/notifications", &other.to_string()).await;

    let (status, resp) = get_json(&app, INBOX).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = resp
        .as_array()
        .expect("response should be an array")
        .iter()
        .filter_map(|n| n["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["second", "first"]);
}

/// An empty inbox lists as an empty array.
#[tokio::test]
async fn empty_inbox_lists_empty() {
    let (app, _hub) = test_app();

    let (status, resp) = get_json(&app, "/api/workers/99/notifications").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp, json!([]));
}

/// A non-numeric worker id is rejected by the path extractor.
#[tokio::test]
async fn non_numeric_worker_id_is_rejected() {
    let (app, _hub) = test_app();

    let (status, _) = get_json(&app, "/api/workers/abc/notifications").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// GET /health reports status and version.
#[tokio::test]
async fn health_reports_ok() {
    let (app, _hub) = test_app();

    let (status, resp) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "ok");
    assert!(resp["uptime_seconds"].as_u64().is_some());
    assert!(resp["version"].as_str().is_some());
}
