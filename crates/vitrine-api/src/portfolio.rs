//! Handlers for `/portfolio` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/portfolio` | Full catalog, insertion order |
//! | `GET`  | `/portfolio/{id}` | 404 if not found |

use axum::{
  Json,
  extract::{Path, State},
};
use serde_json::{Value, json};
use vitrine_core::store::ContactStore;

use crate::{AppState, error::ApiError};

/// `GET /portfolio`
pub async fn list<S>(State(state): State<AppState<S>>) -> Json<Value>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let items = state.catalog.items();
  Json(json!({
    "success": true,
    "data": items,
    "count": items.len(),
  }))
}

/// `GET /portfolio/{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let item = state.catalog.get(id)?;
  Ok(Json(json!({
    "success": true,
    "data": item,
  })))
}
