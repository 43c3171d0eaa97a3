//! Conversation isolation: every conversation id owns its own session.

mod helpers;

use helpers::TestHarness;

#[tokio::test]
async fn conversations_fill_slots_independently() {
    let harness = TestHarness::with_sample_data();

    harness.chat(Some("alpha"), "redeem order").await;
    harness.chat(Some("beta"), "redeem order").await;

    // alpha names its service; beta must still be asked for one
    let (_, alpha) = harness.chat(Some("alpha"), "wallet").await;
    assert!(alpha["text"].as_str().unwrap().contains("Which environment?"));

    let (_, beta) = harness.chat(Some("beta"), "uat").await;
    assert_eq!(beta["status_code"], 206);
    assert!(beta["text"].as_str().unwrap().contains("Which service?"));
}

#[tokio::test]
async fn reset_in_one_conversation_does_not_touch_another() {
    let harness = TestHarness::with_sample_data();

    harness.chat(Some("alpha"), "redeem order").await;
    harness.chat(Some("alpha"), "wallet").await;
    harness.chat(Some("beta"), "redeem order").await;

    let (_, reset) = harness.chat(Some("beta"), "cancel").await;
    assert_eq!(reset["status_code"], 200);

    // alpha keeps its accumulated slots and completes
    let (_, done) = harness.chat(Some("alpha"), "uat").await;
    assert_eq!(done["status_code"], 200);
    assert!(done["text"].as_str().unwrap().contains("Service: wallet"));
}

#[tokio::test]
async fn completing_one_conversation_leaves_others_mid_flight() {
    let harness = TestHarness::with_sample_data();

    harness.chat(Some("alpha"), "redeem order on wallet in uat").await;
    harness.chat(Some("beta"), "redeem order").await;
    harness.chat(Some("beta"), "wallet").await;

    // beta is still waiting on its environment
    let (_, beta) = harness.chat(Some("beta"), "sit").await;
    assert_eq!(beta["status_code"], 200);
    assert!(beta["text"].as_str().unwrap().contains("Environment: sit"));
}

#[tokio::test]
async fn session_entries_are_created_per_conversation() {
    let harness = TestHarness::with_sample_data();

    harness.chat(Some("alpha"), "redeem order").await;
    harness.chat(Some("beta"), "redeem order").await;
    harness.chat(Some("alpha"), "wallet").await;

    assert_eq!(harness.state.session_count().await, 2);
}
