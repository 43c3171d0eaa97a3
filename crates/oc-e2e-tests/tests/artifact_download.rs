//! Artifact download against a real store directory.

mod helpers;

use axum::http::StatusCode;
use helpers::TestHarness;

use oc_chat_api::state::AppState;
use oc_dialogue::{DialogueConfig, DialogueEngine};

#[tokio::test]
async fn completed_intent_artifact_can_be_downloaded() {
    let store = std::env::temp_dir().join(format!("opschat-e2e-{}", std::process::id()));
    tokio::fs::create_dir_all(store.join("postman")).await.unwrap();
    tokio::fs::write(store.join("postman").join("wallet.json"), b"{\"collection\":true}")
        .await
        .unwrap();

    let engine = DialogueEngine::with_defaults(DialogueConfig::sample());
    let harness = TestHarness::with_state(AppState::new(engine, store.clone()));

    // drive a conversation to the artifact reference
    let (_, first) = harness.chat(Some("dl-1"), "postman collection for wallet").await;
    assert_eq!(first["status_code"], 200);
    assert_eq!(first["file_name"], "wallet.json");
    let intent = first["intent"].as_str().unwrap();

    let (status, body) = harness
        .get(&format!(
            "/api/v1/files?file_name=wallet.json&intent={intent}"
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"{\"collection\":true}");

    tokio::fs::remove_dir_all(&store).await.ok();
}
