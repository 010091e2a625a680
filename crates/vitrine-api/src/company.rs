//! Handler for `GET /company`.

use axum::{Json, extract::State};
use serde_json::{Value, json};
use vitrine_core::store::ContactStore;

use crate::AppState;

/// `GET /company` — the fixed company-information record, returned verbatim.
pub async fn handler<S>(State(state): State<AppState<S>>) -> Json<Value>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  Json(json!({
    "success": true,
    "data": &*state.company,
  }))
}
