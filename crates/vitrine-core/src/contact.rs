//! Contact-form types and the submission validator.
//!
//! The validator is the single place untrusted input is converted into
//! trusted data. Identifier and timestamp assignment belong to the store,
//! not the validator, so uniqueness can be guaranteed there.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Syntactic sanity check only: `local@domain.tld` with no whitespace and no
/// stray `@` inside a segment. Deliverability is not verified.
static EMAIL_SHAPE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Subject used when the submitter leaves the field blank.
pub const DEFAULT_SUBJECT: &str = "General Inquiry";

// ─── Untrusted input ─────────────────────────────────────────────────────────

/// A raw contact-form submission as it arrives over the wire.
/// Every field is optional; [`validate`] decides what is acceptable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub subject: Option<String>,
  pub message: Option<String>,
}

// ─── Trusted data ────────────────────────────────────────────────────────────

/// A submission that has passed validation and normalisation.
/// Input to [`crate::store::ContactStore::add_contact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedContact {
  pub name:    String,
  pub email:   String,
  pub subject: String,
  pub message: String,
}

/// Initial lifecycle state of a stored contact. No update operation exists,
/// so a record never leaves the `New` state in this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
  #[default]
  New,
}

/// A stored contact record. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
  /// Store-assigned: millisecond-derived and strictly increasing.
  pub id:        i64,
  pub name:      String,
  pub email:     String,
  pub subject:   String,
  pub message:   String,
  /// Server-assigned creation instant; never changes.
  pub timestamp: DateTime<Utc>,
  pub status:    ContactStatus,
}

// ─── Validator ───────────────────────────────────────────────────────────────

/// Validate a raw submission and normalise it into an [`AcceptedContact`].
///
/// Presence is checked on the raw fields: an absent or empty string is
/// rejected, but a whitespace-only string is not — it survives the presence
/// check and is trimmed afterwards (edges only, never collapsed internally).
/// The email shape is likewise tested on the raw value, before trimming.
///
/// No side effects on failure; appending the accepted submission is the
/// store's job.
pub fn validate(input: &ContactSubmission) -> Result<AcceptedContact> {
  let (Some(name), Some(email), Some(message)) = (
    present(&input.name),
    present(&input.email),
    present(&input.message),
  ) else {
    return Err(Error::MissingFields);
  };

  if !EMAIL_SHAPE.is_match(email) {
    return Err(Error::InvalidEmail);
  }

  let subject = match present(&input.subject) {
    Some(s) => s.trim().to_owned(),
    None => DEFAULT_SUBJECT.to_owned(),
  };

  Ok(AcceptedContact {
    name: name.trim().to_owned(),
    email: email.trim().to_lowercase(),
    subject,
    message: message.trim().to_owned(),
  })
}

/// Falsy check: `None` and `""` count as missing, whitespace does not.
fn present(field: &Option<String>) -> Option<&str> {
  field.as_deref().filter(|s| !s.is_empty())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
    ContactSubmission {
      name:    Some(name.to_owned()),
      email:   Some(email.to_owned()),
      subject: None,
      message: Some(message.to_owned()),
    }
  }

  #[test]
  fn absent_required_field_is_rejected() {
    let mut input = submission("Jane", "jane@example.com", "hi");
    input.message = None;
    assert_eq!(validate(&input), Err(Error::MissingFields));
  }

  #[test]
  fn empty_required_field_is_rejected() {
    let input = submission("", "jane@example.com", "hi");
    assert_eq!(validate(&input), Err(Error::MissingFields));
  }

  #[test]
  fn whitespace_only_name_survives_the_presence_check() {
    // "   " is not falsy, so it passes presence and is trimmed to "".
    let accepted = validate(&submission("   ", "jane@example.com", "hi")).unwrap();
    assert_eq!(accepted.name, "");
  }

  #[test]
  fn malformed_emails_are_rejected() {
    for email in ["a@b", "noat.com", "a@b@c.com", "a b@c.com", "a@b c.com", "@b.com", "a@"] {
      assert_eq!(
        validate(&submission("Jane", email, "hi")),
        Err(Error::InvalidEmail),
        "{email} should be rejected",
      );
    }
  }

  #[test]
  fn well_shaped_emails_are_accepted() {
    for email in ["jane@example.com", "a@b.co", "first.last@sub.domain.org"] {
      assert!(validate(&submission("Jane", email, "hi")).is_ok(), "{email}");
    }
  }

  #[test]
  fn email_shape_is_tested_before_trimming() {
    // A surrounding space fails the shape check even though trimming would
    // have produced a valid address.
    assert_eq!(
      validate(&submission("Jane", " jane@example.com ", "hi")),
      Err(Error::InvalidEmail),
    );
  }

  #[test]
  fn accepted_submission_is_normalised() {
    let accepted = validate(&submission("  Jane  ", "JANE@X.COM", "hi")).unwrap();
    assert_eq!(accepted.name, "Jane");
    assert_eq!(accepted.email, "jane@x.com");
    assert_eq!(accepted.subject, DEFAULT_SUBJECT);
    assert_eq!(accepted.message, "hi");
  }

  #[test]
  fn explicit_subject_is_kept_trimmed() {
    let mut input = submission("Jane", "jane@example.com", "hi");
    input.subject = Some("  Project quote  ".to_owned());
    let accepted = validate(&input).unwrap();
    assert_eq!(accepted.subject, "Project quote");
  }

  #[test]
  fn internal_whitespace_is_preserved() {
    let accepted = validate(&submission("Jane", "jane@example.com", "  hello   world  ")).unwrap();
    assert_eq!(accepted.message, "hello   world");
  }
}
