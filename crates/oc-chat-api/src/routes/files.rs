//! Artifact download endpoint.
//!
//! Completed intents may reference a downloadable file (`file_name` on the
//! turn response). Files live under the store root in a per-intent
//! subdirectory.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Query parameters for a file download.
#[derive(Debug, Deserialize)]
pub struct FileQuery {
    pub file_name: String,
    /// Intent that produced the artifact; selects the storage subdirectory.
    pub intent: String,
}

/// GET /api/v1/files — download an artifact referenced by a turn response.
pub async fn download_file(
    State(state): State<AppState>,
    Query(query): Query<FileQuery>,
) -> ApiResult<impl IntoResponse> {
    let Some(subdir) = storage_subdir(&query.intent) else {
        return Err(ApiError::BadRequest(format!(
            "intent '{}' has no downloadable artifact",
            query.intent
        )));
    };

    // The file name comes from the client; keep lookups inside the store.
    if query.file_name.contains('/')
        || query.file_name.contains('\\')
        || query.file_name.contains("..")
    {
        return Err(ApiError::BadRequest("invalid file name".into()));
    }

    let path = state.store_dir.join(subdir).join(&query.file_name);
    let bytes = tokio::fs::read(&path).await.map_err(|_| {
        ApiError::NotFound(format!("file '{}' not found", query.file_name))
    })?;

    tracing::info!(path = %path.display(), "artifact downloaded");

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", query.file_name),
            ),
        ],
        bytes,
    ))
}

/// Storage subdirectory per intent, `None` when the intent produces no file.
fn storage_subdir(intent: &str) -> Option<&'static str> {
    match intent {
        "get_postman" => Some("postman"),
        "get_log" => Some("logs"),
        "execute_api" | "get_request_response" | "get_api_documentation" => Some("responses"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subdir_mapping() {
        assert_eq!(storage_subdir("get_postman"), Some("postman"));
        assert_eq!(storage_subdir("get_log"), Some("logs"));
        assert_eq!(storage_subdir("execute_api"), Some("responses"));
        assert_eq!(storage_subdir("get_vulnerabilities"), None);
    }
}
