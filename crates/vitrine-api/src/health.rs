//! Handler for `GET /health`.

use axum::{Json, extract::State};
use chrono::Utc;
use serde_json::{Value, json};
use vitrine_core::store::ContactStore;

use crate::AppState;

/// `GET /health` — liveness probe with an environment echo.
pub async fn handler<S>(State(state): State<AppState<S>>) -> Json<Value>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  Json(json!({
    "status": "OK",
    "message": "Vitrine API is running",
    "timestamp": Utc::now(),
    "environment": state.environment.as_str(),
  }))
}
