//! Async HTTP client wrapping the Vitrine JSON API.
//!
//! One method per server endpoint, each returning the typed payload of the
//! response envelope or propagating the failure. Failures are classified
//! (see [`FailureKind`]) for diagnostic logging only — classification never
//! alters what the caller receives.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use vitrine_core::{
  company::CompanyInfo,
  contact::{ContactRecord, ContactSubmission},
  portfolio::PortfolioItem,
  search::SearchHit,
};

// ─── Failure classification ──────────────────────────────────────────────────

/// How a failed request went wrong. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
  /// The server responded with a non-success status.
  ErrorStatus,
  /// The request never produced a response (connect, timeout, body
  /// transfer).
  NoResponse,
  /// The request could not be constructed in the first place.
  InvalidRequest,
}

/// Classify a transport-level failure for logging.
pub fn classify(err: &reqwest::Error) -> FailureKind {
  if err.is_status() {
    FailureKind::ErrorStatus
  } else if err.is_builder() {
    FailureKind::InvalidRequest
  } else {
    FailureKind::NoResponse
  }
}

// ─── Wire types ──────────────────────────────────────────────────────────────

/// The `{success, data, ...}` envelope every endpoint responds with.
/// Unknown fields (`count`, `query`, ...) are ignored.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
  #[allow(dead_code)]
  success: bool,
  data:    Option<T>,
  message: Option<String>,
}

/// Body of `GET /api/health` — the one endpoint without an envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthReport {
  pub status:      String,
  pub message:     String,
  pub timestamp:   DateTime<Utc>,
  pub environment: String,
}

/// Acknowledgement payload of a successful contact submission.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactReceipt {
  pub id:        i64,
  pub timestamp: DateTime<Utc>,
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Connection settings for the Vitrine API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the Vitrine JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(10))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// Fire `req`, log a classified diagnostic on failure, and parse the body
  /// as `T`. The original failure is propagated unchanged.
  async fn execute<T>(&self, what: &str, req: reqwest::RequestBuilder) -> Result<T>
  where
    T: serde::de::DeserializeOwned,
  {
    let response = match req.send().await {
      Ok(response) => response,
      Err(e) => {
        tracing::error!(kind = ?classify(&e), error = %e, "{what} failed");
        return Err(e).with_context(|| format!("{what} failed"));
      }
    };

    if !response.status().is_success() {
      let status = response.status();
      let message = response
        .json::<Envelope<Value>>()
        .await
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_default();
      tracing::error!(
        kind = ?FailureKind::ErrorStatus,
        %status,
        message = %message,
        "{what} failed"
      );
      return Err(anyhow!("{what} → {status}"));
    }

    response
      .json()
      .await
      .with_context(|| format!("deserialising {what} response"))
  }

  /// Unwrap the envelope's `data`, which every successful response carries.
  async fn data<T>(&self, what: &str, req: reqwest::RequestBuilder) -> Result<T>
  where
    T: serde::de::DeserializeOwned,
  {
    let envelope: Envelope<T> = self.execute(what, req).await?;
    envelope
      .data
      .ok_or_else(|| anyhow!("{what} response carried no data"))
  }

  // ── Health ────────────────────────────────────────────────────────────────

  /// `GET /api/health`
  pub async fn check_health(&self) -> Result<HealthReport> {
    self
      .execute("GET /health", self.client.get(self.url("/health")))
      .await
  }

  // ── Portfolio ─────────────────────────────────────────────────────────────

  /// `GET /api/portfolio`
  pub async fn get_portfolio(&self) -> Result<Vec<PortfolioItem>> {
    self
      .data("GET /portfolio", self.client.get(self.url("/portfolio")))
      .await
  }

  /// `GET /api/portfolio/{id}`
  pub async fn get_portfolio_item(&self, id: i64) -> Result<PortfolioItem> {
    self
      .data(
        "GET /portfolio/{id}",
        self.client.get(self.url(&format!("/portfolio/{id}"))),
      )
      .await
  }

  // ── Contact form ──────────────────────────────────────────────────────────

  /// `POST /api/contact`
  pub async fn submit_contact(&self, form: &ContactSubmission) -> Result<ContactReceipt> {
    self
      .data(
        "POST /contact",
        self.client.post(self.url("/contact")).json(form),
      )
      .await
  }

  /// `GET /api/contacts`
  pub async fn get_contacts(&self) -> Result<Vec<ContactRecord>> {
    self
      .data("GET /contacts", self.client.get(self.url("/contacts")))
      .await
  }

  // ── Company ───────────────────────────────────────────────────────────────

  /// `GET /api/company`
  pub async fn get_company(&self) -> Result<CompanyInfo> {
    self
      .data("GET /company", self.client.get(self.url("/company")))
      .await
  }

  // ── Search ────────────────────────────────────────────────────────────────

  /// `GET /api/search?q=...[&type=...]`
  ///
  /// `kind` is sent only when the caller supplies one; the server scans the
  /// portfolio catalog when it is absent.
  pub async fn search(&self, query: &str, kind: Option<&str>) -> Result<Vec<SearchHit>> {
    let mut req = self
      .client
      .get(self.url("/search"))
      .query(&[("q", query)]);
    if let Some(kind) = kind {
      req = req.query(&[("type", kind)]);
    }
    self.data("GET /search", req).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn url_joins_base_and_path() {
    let client = ApiClient::new(ApiConfig {
      base_url: "http://localhost:3001/".to_owned(),
    })
    .unwrap();
    assert_eq!(client.url("/portfolio"), "http://localhost:3001/api/portfolio");

    let client = ApiClient::new(ApiConfig {
      base_url: "http://localhost:3001".to_owned(),
    })
    .unwrap();
    assert_eq!(client.url("/search"), "http://localhost:3001/api/search");
  }
}
