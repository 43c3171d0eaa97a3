//! Shared test harness for E2E integration tests.
//!
//! Drives the real router (and therefore the real engine, resolvers and
//! collaborators) through `tower::oneshot`, the same way a browser client
//! would hit the HTTP API.

// Each test binary uses its own slice of the harness API.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use oc_chat_api::routes::build_router;
use oc_chat_api::state::AppState;

/// End-to-end harness over the chat API with in-memory sample data.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Harness with the built-in sample catalog and intents.
    pub fn with_sample_data() -> Self {
        let state = AppState::with_sample_data();
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// Harness over a custom application state (scripted engines, custom
    /// store directories).
    pub fn with_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// Send one chat turn. Returns (HTTP status, response JSON).
    pub async fn chat(
        &self,
        conversation_id: Option<&str>,
        message: &str,
    ) -> (StatusCode, serde_json::Value) {
        let mut body = serde_json::json!({ "message": message });
        if let Some(id) = conversation_id {
            body["conversation_id"] = serde_json::Value::String(id.to_string());
        }

        let response = self
            .router
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

    /// GET an arbitrary path. Returns (HTTP status, raw body bytes).
    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }
}

/// Walk a conversation through several turns, returning the last reply.
/// Panics if any turn fails at the HTTP level.
#[allow(dead_code)]
pub async fn run_turns(
    harness: &TestHarness,
    conversation_id: &str,
    turns: &[&str],
) -> serde_json::Value {
    let mut last = serde_json::Value::Null;
    for turn in turns {
        let (status, json) = harness.chat(Some(conversation_id), turn).await;
        assert_eq!(status, StatusCode::OK, "turn '{turn}' failed: {json}");
        last = json;
    }
    last
}
