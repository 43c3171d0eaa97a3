//! OpsChat API — library crate for the chat REST server.
//!
//! Re-exports all modules so the binary (`main.rs`) and the e2e test crate
//! can access `AppState`, `build_router` and the route types.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
