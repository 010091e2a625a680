//! [`MemStore`] — the in-memory implementation of [`ContactStore`].

use std::{convert::Infallible, sync::Arc};

use chrono::Utc;
use tokio::sync::Mutex;

use vitrine_core::{
  contact::{AcceptedContact, ContactRecord, ContactStatus},
  store::ContactStore,
};

/// An append-only contact store held entirely in process memory.
///
/// Cloning is cheap — the inner list is reference-counted. Appends take a
/// mutex so the single-writer-per-append guarantee holds under concurrent
/// handlers.
#[derive(Clone, Default)]
pub struct MemStore {
  inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
  contacts: Vec<ContactRecord>,
  last_id:  i64,
}

impl MemStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl ContactStore for MemStore {
  type Error = Infallible;

  async fn add_contact(
    &self,
    accepted: AcceptedContact,
  ) -> Result<ContactRecord, Infallible> {
    let mut inner = self.inner.lock().await;
    let now = Utc::now();

    // Millisecond-derived, bumped past the previous id so two appends within
    // the same millisecond still get distinct, increasing ids.
    let id = now.timestamp_millis().max(inner.last_id + 1);
    inner.last_id = id;

    let record = ContactRecord {
      id,
      name: accepted.name,
      email: accepted.email,
      subject: accepted.subject,
      message: accepted.message,
      timestamp: now,
      status: ContactStatus::New,
    };
    inner.contacts.push(record.clone());
    Ok(record)
  }

  async fn list_contacts(&self) -> Result<Vec<ContactRecord>, Infallible> {
    Ok(self.inner.lock().await.contacts.clone())
  }

  async fn get_contact(&self, id: i64) -> Result<Option<ContactRecord>, Infallible> {
    Ok(
      self
        .inner
        .lock()
        .await
        .contacts
        .iter()
        .find(|record| record.id == id)
        .cloned(),
    )
  }
}
