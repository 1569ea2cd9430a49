mod support;

use serde_json::Value;

#[tokio::test]
async fn test_health_reports_up() {
    let base_url = support::base_url();

    let res = reqwest::get(format!("{base_url}/health"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["status"], "UP");
}

#[tokio::test]
async fn test_unknown_route_returns_not_found_envelope() {
    let base_url = support::base_url();
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{base_url}/api/feedbacks/9"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Resource not found");
    assert_eq!(body["error"], "No endpoint DELETE /api/feedbacks/9");
    assert_eq!(body["path"], "uri=/api/feedbacks/9");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_wrong_method_returns_internal_error_envelope() {
    let base_url = support::base_url();
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{base_url}/health"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["path"], "uri=/health");
    assert!(body["timestamp"].is_string());
}
