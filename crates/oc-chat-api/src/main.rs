//! OpsChat Chat API — slot-filling dialogue REST server.
//!
//! Exposes one turn endpoint (`POST /api/v1/chat`), artifact downloads and
//! a health probe over the dialogue engine.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use oc_chat_api::config::ApiConfig;
use oc_chat_api::routes::build_router;
use oc_chat_api::state::AppState;
use oc_dialogue::{DialogueConfig, DialogueEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "oc-chat-api starting");

    let config = ApiConfig::from_env();

    let dialogue_config = match &config.config_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "loading dialogue configuration");
            DialogueConfig::load(dir)?
        }
        None => {
            tracing::warn!("OPSCHAT_CONFIG_DIR not set — using built-in sample configuration");
            DialogueConfig::sample()
        }
    };

    let engine = DialogueEngine::with_defaults(dialogue_config);
    let state = AppState::new(engine, config.store_dir.clone());
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
