//! HTTP server assembly for the Vitrine site backend.
//!
//! Wraps [`vitrine_api::api_router`] with CORS, baseline security headers,
//! request tracing, and a JSON 404 fallback, and owns the runtime
//! configuration type. The binary in `main.rs` is a thin bootstrap around
//! [`app`].

use std::sync::Arc;

use axum::{
  Json, Router,
  http::{HeaderValue, Method, StatusCode, Uri, header},
  response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{
  cors::{Any, CorsLayer},
  set_header::SetResponseHeaderLayer,
  trace::TraceLayer,
};
use vitrine_api::{AppState, Environment};
use vitrine_core::{company::CompanyInfo, portfolio::Catalog, store::ContactStore};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` merged with
/// the `VITRINE_*` environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:        String,
  #[serde(default = "default_port")]
  pub port:        u16,
  #[serde(default)]
  pub environment: Environment,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:        default_host(),
      port:        default_port(),
      environment: Environment::default(),
    }
  }
}

fn default_host() -> String {
  "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
  3001
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the complete application router for `store`.
///
/// The catalog and company record are seeded here; both are read-only for
/// the life of the process.
pub fn app<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: ContactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let state = AppState {
    store,
    catalog: Arc::new(Catalog::seed()),
    company: Arc::new(CompanyInfo::fixed()),
    environment: config.environment,
  };

  Router::new()
    .nest("/api", vitrine_api::api_router(state))
    .fallback(not_found)
    .layer(TraceLayer::new_for_http())
    .layer(
      CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any),
    )
    .layer(SetResponseHeaderLayer::overriding(
      header::X_CONTENT_TYPE_OPTIONS,
      HeaderValue::from_static("nosniff"),
    ))
    .layer(SetResponseHeaderLayer::overriding(
      header::X_FRAME_OPTIONS,
      HeaderValue::from_static("DENY"),
    ))
}

/// JSON 404 for unmatched routes, echoing what was asked for.
async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
  (
    StatusCode::NOT_FOUND,
    Json(json!({
      "success": false,
      "message": "Endpoint not found",
      "path": uri.path(),
      "method": method.as_str(),
    })),
  )
}

// ─── Integration tests ───────────────────────────────────────────────────────
