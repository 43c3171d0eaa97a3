//! Shared application state for the Axum server.
//!
//! One `SessionState` per conversation id, stored behind its own async
//! mutex: the map lock is held only to fetch or create the entry, and the
//! per-conversation mutex serializes turns within a conversation while
//! different conversations proceed in parallel.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};

use oc_dialogue::{DialogueConfig, DialogueEngine, SessionState};

/// Shared application state, wrapped in `Arc` for Axum handler sharing.
#[derive(Clone)]
pub struct AppState {
    /// Shared, stateless dialogue engine.
    pub engine: Arc<DialogueEngine>,
    /// Conversation id → session entry.
    sessions: Arc<RwLock<HashMap<String, Arc<Mutex<SessionEntry>>>>>,
    /// Root directory for downloadable artifacts.
    pub store_dir: PathBuf,
}

/// A conversation's state plus bookkeeping.
#[derive(Debug, Default)]
pub struct SessionEntry {
    pub state: SessionState,
    pub last_activity: Option<DateTime<Utc>>,
}

impl SessionEntry {
    pub fn touch(&mut self) {
        self.last_activity = Some(Utc::now());
    }
}

impl AppState {
    pub fn new(engine: DialogueEngine, store_dir: PathBuf) -> Self {
        Self {
            engine: Arc::new(engine),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            store_dir,
        }
    }

    /// State backed by the built-in sample configuration (tests and
    /// development).
    pub fn with_sample_data() -> Self {
        Self::new(
            DialogueEngine::with_defaults(DialogueConfig::sample()),
            PathBuf::from("store"),
        )
    }

    /// Fetch or create the session entry for a conversation id.
    pub async fn session(&self, conversation_id: &str) -> Arc<Mutex<SessionEntry>> {
        if let Some(entry) = self.sessions.read().await.get(conversation_id) {
            return entry.clone();
        }
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(conversation_id.to_string())
            .or_default()
            .clone()
    }

    /// Number of live conversations.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
