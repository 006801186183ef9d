use axum::{Router, routing::get};
use axum_test::TestServer;
use tradein_returns::api::handlers::health_handler;

#[tokio::test]
async fn test_health_reports_status_and_version() {
    let app = Router::new().route("/health", get(health_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
