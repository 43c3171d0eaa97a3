//! Chat turn endpoint.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use oc_protocol::TurnResponse;

/// Request body for one conversation turn.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Conversation to continue; omitted → a new conversation is opened
    /// and its id returned.
    pub conversation_id: Option<String>,
    /// Raw user text for this turn.
    pub message: String,
}

/// One turn's reply: the dialogue response plus the conversation id the
/// client must echo on the next turn.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub conversation_id: String,
    #[serde(flatten)]
    pub turn: TurnResponse,
}

/// POST /api/v1/chat — handle one user turn.
pub async fn chat_turn(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatReply>> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".into()));
    }

    let conversation_id = match req.conversation_id {
        Some(id) if !id.trim().is_empty() => id,
        _ => Uuid::now_v7().to_string(),
    };

    let entry = state.session(&conversation_id).await;
    let mut entry = entry.lock().await;
    entry.touch();

    let turn = state
        .engine
        .handle_turn(&mut entry.state, message)
        .await
        .map_err(|e| {
            tracing::error!(conversation_id = %conversation_id, error = %e, "turn failed");
            ApiError::from(e)
        })?;

    tracing::info!(
        conversation_id = %conversation_id,
        status = turn.status_code,
        intent = ?turn.intent,
        "turn handled"
    );

    Ok(Json(ChatReply {
        conversation_id,
        turn,
    }))
}
