#![cfg(feature = "server")]

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use ohm_domain::config::{ApiConfig, ResistorConfig};
use ohm_kernel::server::ApiState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> axum::Router {
    let slice = ohm_resistor::init(&ResistorConfig::default()).expect("standard table");
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(slice)
        .build()
        .expect("state");
    let (router, _api) = ohm_resistor::api::router().with_state(state).split_for_parts();
    router
}

async fn post(path: &str, body: &Value) -> Response {
    let request = Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    app().oneshot(request).await.expect("infallible")
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8")
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn calculate_value_returns_html_label() {
    let response = post(
        "/calculate-value",
        &json!({"firstBand": "red", "secondBand": "red", "exponentBand": "orange", "toleranceBand": "gold"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok());
    assert!(content_type.is_some_and(|v| v.starts_with("text/html")), "got {content_type:?}");
    assert_eq!(body_text(response).await, "22000 ohms ±5%");
}

#[tokio::test]
async fn calculate_values_returns_bounds() {
    let response = post(
        "/calculate-values",
        &json!({
            "firstBand": "green",
            "secondBand": "blue",
            "thirdBand": "black",
            "exponentBand": "black",
            "toleranceBand": "brown",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"baseResistance": 560.0, "maxResistance": 565.6, "mixResistance": 554.4, "tolerance": 1.0})
    );
}

#[tokio::test]
async fn invalid_fields_are_a_bad_request() {
    for path in ["/calculate-value", "/calculate-values"] {
        let response = post(path, &json!({"firstBand": "transparent", "toleranceBand": "black"})).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"invalidFields": ["firstBand", "secondBand", "exponentBand", "toleranceBand"]})
        );
    }
}

#[tokio::test]
async fn malformed_body_never_reaches_the_calculator() {
    let request = Request::post("/calculate-value")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request");
    let response = app().oneshot(request).await.expect("infallible");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!body_text(response).await.contains("invalidFields"));
}

#[tokio::test]
async fn colors_lists_the_table() {
    let response = app()
        .oneshot(Request::get("/colors").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    let colors = body_json(response).await;
    let colors = colors.as_array().expect("array");
    assert_eq!(colors.len(), 13);
    assert_eq!(colors[0]["name"], "pink");
    assert_eq!(colors[3]["roles"], json!(["digit", "exponent"]));
}

#[tokio::test]
async fn missing_slice_is_a_server_error() {
    let state = ApiState::builder().config(ApiConfig::default()).build().expect("state");
    let (router, _api) = ohm_resistor::api::router().with_state(state).split_for_parts();

    let response = router
        .oneshot(Request::get("/colors").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
