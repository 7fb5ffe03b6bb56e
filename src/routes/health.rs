use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.store.load().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "document": state.config.data_file.display().to_string() })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "error", "document": e.to_string() })),
        ),
    }
}
