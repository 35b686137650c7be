//! # dollarwords API
//!
//! HTTP transport for [`dollarwords_core`].
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          API Routes                                     │
//! │                                                                         │
//! │  POST /api/numbertowords/convert   {"number": "..."} → words            │
//! │  GET  /health                      "OK"                                 │
//! │  GET  /*                           static/ (fallback: index.html)       │
//! │                                                                         │
//! │  Layers (outer → inner): TraceLayer → CatchPanicLayer → routes          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `API_HOST` - Bind interface (default: 0.0.0.0)
//! - `API_PORT` - HTTP port (default: 8080)
//! - `STATIC_DIR` - Web form directory (default: static)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod services;

use std::any::Any;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use dollarwords_core::NumberWordsConverter;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::error;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;

/// Path of the conversion endpoint.
pub const CONVERT_PATH: &str = "/api/numbertowords/convert";

/// Shared application state.
pub struct AppState {
    pub converter: NumberWordsConverter,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            converter: NumberWordsConverter::new(),
            config,
        }
    }
}

/// Builds the router with all routes and middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();
    // Unknown paths get the form with 200, so client-side routes load
    let web_form =
        ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let routes = Router::new()
        .route(CONVERT_PATH, post(services::convert_service::convert))
        .route("/health", get(services::health_service::health))
        .fallback_service(web_form)
        .with_state(state);

    apply_layers(routes)
}

fn apply_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Turns a handler panic into the usual failure body with status 500.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(%detail, "Request handler panicked");
    ApiError::internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        create_router(Arc::new(AppState::new(ApiConfig::default())))
    }

    fn convert_request(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(CONVERT_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&body).unwrap();
        (status, json)
    }

    async fn post_number(number: Value) -> (StatusCode, Value) {
        let body = json!({ "number": number }).to_string();
        send(test_app(), convert_request(body)).await
    }

    #[tokio::test]
    async fn test_convert_success() {
        let (status, json) = post_number(json!("123.45")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({
                "words": "ONE HUNDRED AND TWENTY-THREE DOLLARS AND FORTY-FIVE CENTS",
                "success": true
            })
        );
    }

    #[tokio::test]
    async fn test_convert_zero() {
        let (status, json) = post_number(json!("0.00")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["words"], "ZERO DOLLARS");
    }

    #[tokio::test]
    async fn test_convert_validation_failure() {
        let (status, json) = post_number(json!("-123.45")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            json!({
                "words": "",
                "success": false,
                "errorMessage": "Negative numbers are not supported"
            })
        );
    }

    #[tokio::test]
    async fn test_convert_too_large() {
        let (status, json) = post_number(json!("1000000000000")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["errorMessage"],
            "Number too large (maximum 999,999,999,999.99)"
        );
    }

    #[tokio::test]
    async fn test_convert_invalid_format() {
        let (status, json) = post_number(json!("abc")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errorMessage"], "Invalid number format");
    }

    #[tokio::test]
    async fn test_missing_null_or_blank_number_is_required() {
        for number in [Value::Null, json!(""), json!("   ")] {
            let (status, json) = post_number(number).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["errorMessage"], "Number is required");
            assert_eq!(json["success"], false);
        }

        let (status, json) = send(test_app(), convert_request("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errorMessage"], "Number is required");
    }

    #[tokio::test]
    async fn test_malformed_body() {
        for body in ["not json", "[1, 2]", r#"{"number": 12}"#] {
            let (status, json) = send(test_app(), convert_request(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {body:?}");
            assert_eq!(json["errorMessage"], "Invalid request body");
            assert_eq!(json["words"], "");
        }
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"OK");
    }

    async fn get_page(uri: &str) -> (StatusCode, String) {
        let config = ApiConfig {
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
            ..ApiConfig::default()
        };
        let app = create_router(Arc::new(AppState::new(config)));
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_root_serves_web_form() {
        let (status, body) = get_page("/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<form"));
    }

    #[tokio::test]
    async fn test_unknown_path_serves_web_form() {
        let (status, body) = get_page("/some/client/route").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<form"));
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        async fn explode() -> &'static str {
            panic!("kaboom")
        }

        let app = apply_layers(Router::new().route("/explode", get(explode)));
        let request = Request::builder()
            .uri("/explode")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(app, request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json,
            json!({
                "words": "",
                "success": false,
                "errorMessage": "An unexpected error occurred: kaboom"
            })
        );
    }
}
