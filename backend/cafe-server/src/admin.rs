//! Administrative endpoints for server management.

use crate::AppState;

use axum::{Json, extract::State, http::StatusCode};
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckpointResponse {
    pub status: String,
    pub message: String,
}

/// Checkpoint WAL to main database file.
///
/// Forces SQLite to flush the Write-Ahead Log into the main database file,
/// e.g. before copying the file for a backup.
pub async fn checkpoint_handler(
    State(state): State<AppState>,
) -> Result<Json<CheckpointResponse>, (StatusCode, String)> {
    info!("Manual checkpoint requested");

    sqlx::query("PRAGMA wal_checkpoint(TRUNCATE)")
        .execute(&state.pool)
        .await
        .map_err(|e| {
            log::error!("Checkpoint failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    info!("Database checkpoint completed");

    Ok(Json(CheckpointResponse {
        status: "ok".to_string(),
        message: "Database checkpoint completed".to_string(),
    }))
}
