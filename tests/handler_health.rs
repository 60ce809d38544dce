mod common;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (server, _store) = common::random_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let (server, _store) = common::random_server();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"]["store"].get("message").is_some());
}

#[tokio::test]
async fn test_health_endpoint_trailing_slash() {
    let (server, _store) = common::random_server();

    let response = server.get("/health/").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
}
