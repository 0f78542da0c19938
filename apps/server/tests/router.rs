use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use ohm::domain::config::ApiConfig;
use ohm_server::Server;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(cfg: ApiConfig) -> axum::Router {
    Server::builder().config(cfg).build().expect("default config builds").router()
}

#[tokio::test]
async fn serves_system_and_calculator_routes() {
    let response = app(ApiConfig::default())
        .oneshot(Request::get("/").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::post("/calculate-values")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"firstBand": "red", "secondBand": "red", "exponentBand": "orange", "toleranceBand": "gold"})
                .to_string(),
        ))
        .expect("request");
    let response = app(ApiConfig::default()).oneshot(request).await.expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let values: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(values["mixResistance"], json!(20900.0));
}

#[tokio::test]
async fn api_reference_is_served() {
    let response = app(ApiConfig::default())
        .oneshot(Request::get("/api").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn cors_follows_config() {
    let request = || {
        Request::get("/colors")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .expect("request")
    };

    let response = app(ApiConfig::default()).oneshot(request()).await.expect("infallible");
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let mut cfg = ApiConfig::default();
    cfg.server.cors = false;
    let response = app(cfg).oneshot(request()).await.expect("infallible");
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[test]
fn missing_certificate_fails_build() {
    let mut cfg = ApiConfig::default();
    cfg.server.ssl = Some(ohm::domain::config::SslConfig {
        cert: "does/not/exist.pem".into(),
        key: "does/not/exist.key".into(),
    });

    let err = Server::builder().config(cfg).build().expect_err("missing cert");
    assert!(err.to_string().contains("SSL certificate not found"), "got {err}");
}

#[test]
fn broken_color_table_fails_build() {
    let mut cfg = ApiConfig::default();
    cfg.resistor.colors = Some(Vec::new());

    let err = Server::builder().config(cfg).build().expect_err("empty table");
    assert!(err.to_string().contains("Platform bootstrap failed"), "got {err}");
}
