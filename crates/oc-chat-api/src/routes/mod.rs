//! API route definitions and router builder.

pub mod chat;
pub mod files;
pub mod health;

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/chat", post(chat::chat_turn))
        .route("/files", get(files::download_file));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::with_sample_data())
    }

    async fn post_chat(app: &Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = app
            .clone()
            .oneshot(
                Request::post("/api/v1/chat")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn chat_opens_a_conversation_and_returns_id() {
        let app = app();
        let (status, json) = post_chat(&app, serde_json::json!({ "message": "redeem order" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status_code"], 206);
        assert_eq!(json["intent"], "execute_api");
        assert!(json["conversation_id"].is_string());
        assert!(json["text"].as_str().unwrap().contains("Which service?"));
    }

    #[tokio::test]
    async fn chat_continues_with_same_conversation_id() {
        let app = app();
        let (_, first) = post_chat(&app, serde_json::json!({ "message": "redeem order" })).await;
        let id = first["conversation_id"].as_str().unwrap();

        let (status, second) = post_chat(
            &app,
            serde_json::json!({ "conversation_id": id, "message": "wallet" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(second["conversation_id"], id);
        assert_eq!(second["status_code"], 206);
        assert!(second["text"].as_str().unwrap().contains("Which environment?"));
    }

    #[tokio::test]
    async fn chat_rejects_empty_message() {
        let app = app();
        let (status, json) = post_chat(&app, serde_json::json!({ "message": "  " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], 400);
    }

    #[tokio::test]
    async fn reset_turn_reports_200() {
        let app = app();
        let (_, first) = post_chat(&app, serde_json::json!({ "message": "redeem order" })).await;
        let id = first["conversation_id"].as_str().unwrap();

        let (status, json) = post_chat(
            &app,
            serde_json::json!({ "conversation_id": id, "message": "reset" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status_code"], 200);
        assert!(json["text"].as_str().unwrap().contains("reset"));
    }

    #[tokio::test]
    async fn file_download_rejects_intent_without_artifact() {
        let response = app()
            .oneshot(
                Request::get("/api/v1/files?file_name=wallet.json&intent=get_vulnerabilities")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn file_download_rejects_path_traversal() {
        let response = app()
            .oneshot(
                Request::get("/api/v1/files?file_name=..%2Fsecret&intent=get_postman")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn file_download_missing_file_is_404() {
        let response = app()
            .oneshot(
                Request::get("/api/v1/files?file_name=ghost.json&intent=get_postman")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
