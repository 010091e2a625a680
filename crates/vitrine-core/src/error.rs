//! Error types for `vitrine-core`.
//!
//! The messages double as the user-facing `message` field of error response
//! bodies, so they are phrased for end users rather than operators.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// `name`, `email`, or `message` was absent or empty on submission.
  #[error("Name, email, and message are required")]
  MissingFields,

  #[error("Please provide a valid email address")]
  InvalidEmail,

  #[error("Search query is required")]
  MissingQuery,

  #[error("Portfolio item not found: {0}")]
  ItemNotFound(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
