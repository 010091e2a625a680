//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `vitrine-store-mem`).
//! Higher layers (`vitrine-api`, `vitrine-server`) depend on this
//! abstraction, not on any concrete backend, so an in-memory and a durable
//! implementation can be swapped without touching validation or search.

use std::future::Future;

use crate::contact::{AcceptedContact, ContactRecord};

/// Abstraction over a contact store backend.
///
/// The store is append-only: records are immutable after creation and no
/// update or delete operation exists. `id` and `timestamp` are assigned by
/// the store, not the caller, so uniqueness can be guaranteed under
/// concurrent appends.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Append a validated submission and return the stored record.
  fn add_contact(
    &self,
    accepted: AcceptedContact,
  ) -> impl Future<Output = Result<ContactRecord, Self::Error>> + Send + '_;

  /// All stored records in insertion order.
  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<ContactRecord>, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get_contact(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<ContactRecord>, Self::Error>> + Send + '_;
}
