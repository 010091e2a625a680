//! JSON REST API for the Vitrine site backend.
//!
//! Exposes an axum [`Router`] backed by any
//! [`vitrine_core::store::ContactStore`]. CORS, security headers, and
//! transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", vitrine_api::api_router(state))
//! ```

pub mod company;
pub mod contact;
pub mod error;
pub mod health;
pub mod portfolio;
pub mod search;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use serde::{Deserialize, Serialize};
use vitrine_core::{company::CompanyInfo, portfolio::Catalog, store::ContactStore};

pub use error::ApiError;

// ─── Environment ─────────────────────────────────────────────────────────────

/// Deployment flavour; controls how much failure detail leaves the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
  #[default]
  Development,
  Production,
}

impl Environment {
  /// Whether 500 bodies may carry the underlying failure message.
  pub fn exposes_error_detail(self) -> bool {
    matches!(self, Self::Development)
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Development => "development",
      Self::Production => "production",
    }
  }
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all API handlers.
#[derive(Clone)]
pub struct AppState<S: ContactStore> {
  pub store:       Arc<S>,
  /// Read-only; seeded once at startup.
  pub catalog:     Arc<Catalog>,
  pub company:     Arc<CompanyInfo>,
  pub environment: Environment,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: ContactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/health", get(health::handler::<S>))
    // Portfolio
    .route("/portfolio", get(portfolio::list::<S>))
    .route("/portfolio/{id}", get(portfolio::get_one::<S>))
    // Contact form
    .route("/contact", post(contact::create::<S>))
    .route("/contacts", get(contact::list::<S>))
    // Company info
    .route("/company", get(company::handler::<S>))
    // Search
    .route("/search", get(search::handler::<S>))
    .with_state(state)
}
