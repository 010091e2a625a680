//! Handlers for the contact-form endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/contact` | Body: [`ContactSubmission`]; 201 + id/timestamp |
//! | `GET`  | `/contacts` | Admin listing; messages truncated for display |

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use serde_json::{Value, json};
use vitrine_core::{
  contact::{self, ContactRecord, ContactSubmission},
  store::ContactStore,
};

use crate::{AppState, error::ApiError};

/// Longest message prefix shown in the list view.
const MESSAGE_PREVIEW_CHARS: usize = 100;

/// `POST /contact` — validate, store, and acknowledge a submission.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<ContactSubmission>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let accepted = contact::validate(&body)?;

  let record = state.store.add_contact(accepted).await.map_err(|e| {
    ApiError::unexpected(
      "Error processing your message. Please try again later.",
      e,
      state.environment.exposes_error_detail(),
    )
  })?;

  tracing::info!(
    id = record.id,
    name = %record.name,
    email = %record.email,
    "new contact submission"
  );

  Ok((
    StatusCode::CREATED,
    Json(json!({
      "success": true,
      "message": "Thank you for your message! We will get back to you soon.",
      "data": { "id": record.id, "timestamp": record.timestamp },
    })),
  ))
}

/// `GET /contacts` — every stored record, with the message truncated for
/// display.
///
/// The truncation happens on the serialised copy; the stored record is never
/// mutated, so repeated calls return the same previews.
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<Json<Value>, ApiError>
where
  S: ContactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = state.store.list_contacts().await.map_err(|e| {
    ApiError::unexpected(
      "Error fetching contacts",
      e,
      state.environment.exposes_error_detail(),
    )
  })?;

  let previews: Vec<ContactRecord> = records.into_iter().map(preview).collect();
  Ok(Json(json!({
    "success": true,
    "data": previews,
    "count": previews.len(),
  })))
}

/// Truncate the message to its first [`MESSAGE_PREVIEW_CHARS`] characters,
/// appending an ellipsis marker when anything was cut.
fn preview(mut record: ContactRecord) -> ContactRecord {
  if record.message.chars().count() > MESSAGE_PREVIEW_CHARS {
    let mut preview: String = record.message.chars().take(MESSAGE_PREVIEW_CHARS).collect();
    preview.push_str("...");
    record.message = preview;
  }
  record
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;
  use vitrine_core::contact::ContactStatus;

  fn record_with_message(message: &str) -> ContactRecord {
    ContactRecord {
      id:        1,
      name:      "Jane".to_owned(),
      email:     "jane@example.com".to_owned(),
      subject:   "General Inquiry".to_owned(),
      message:   message.to_owned(),
      timestamp: Utc::now(),
      status:    ContactStatus::New,
    }
  }

  #[test]
  fn short_messages_pass_through_untouched() {
    let record = preview(record_with_message("hello"));
    assert_eq!(record.message, "hello");
  }

  #[test]
  fn exactly_one_hundred_chars_is_not_truncated() {
    let message = "x".repeat(100);
    let record = preview(record_with_message(&message));
    assert_eq!(record.message, message);
  }

  #[test]
  fn long_messages_get_an_ellipsis_marker() {
    let record = preview(record_with_message(&"x".repeat(150)));
    assert_eq!(record.message.chars().count(), 103);
    assert!(record.message.ends_with("..."));
  }
}
