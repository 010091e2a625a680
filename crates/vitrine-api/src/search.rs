//! Handler for `GET /search`.
//!
//! Query params: `q` (required, falsy-checked) and `type` (optional catalog
//! filter; only `"portfolio"` exists today).

use axum::{
  Json,
  extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use vitrine_core::{search, store::ContactStore};

use crate::{AppState, error::ApiError};

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
  /// Free-text query matched against titles, descriptions, and technologies.
  pub q:    Option<String>,
  /// Restrict to a single catalog.
  #[serde(rename = "type")]
  pub kind: Option<String>,
}

/// `GET /search?q=...[&type=portfolio]`
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<Value>, ApiError>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let hits = search::search(&state.catalog, params.q.as_deref(), params.kind.as_deref())?;

  Ok(Json(json!({
    "success": true,
    "data": hits,
    "count": hits.len(),
    "query": params.q,
    "searchType": params.kind.as_deref().unwrap_or("all"),
  })))
}
