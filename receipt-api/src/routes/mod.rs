//! API route handlers

pub mod health;
pub mod receipt;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::metrics::metrics_middleware;
use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        // Health endpoint
        .route("/health", get(health::health_check))
        // Receipt endpoints
        .route("/receipts/process", post(receipt::process_receipt))
        .route("/receipts/:id/points", get(receipt::get_points))
        .route_layer(middleware::from_fn(metrics_middleware))
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .with_state(state);

    if config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ApiConfig;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ApiConfig::default())
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["receipts_stored"], 0);
    }

    #[tokio::test]
    async fn test_process_then_get_points() {
        let state = create_test_state();

        let receipt = json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                { "shortDescription": "Pepsi - 12-oz", "price": "1.25" },
                { "shortDescription": "Dasani", "price": "1.00" }
            ],
            "total": "35.35"
        });

        let response = create_router(state.clone())
            .oneshot(post_json("/receipts/process", &receipt))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        let response = create_router(state)
            .oneshot(
                Request::builder()
                    .uri(format!("/receipts/{}/points", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "points": 18 }));
    }

    #[tokio::test]
    async fn test_unknown_receipt_not_found() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/receipts/nonexistent/points")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No receipt found for that ID.");
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/receipts/process")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "The receipt is invalid. Please verify input.");
    }

    #[tokio::test]
    async fn test_oversized_body_is_bad_request() {
        let config = ApiConfig {
            max_body_size: 16,
            ..Default::default()
        };
        let app = create_router(AppState::new(config));

        let receipt = json!({ "retailer": "a retailer name longer than sixteen bytes" });
        let response = app.oneshot(post_json("/receipts/process", &receipt)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
