//! In-memory backend for the contact store.
//!
//! Records live in process memory and are lost on restart — there is no
//! eviction and no persistence. Durable backends implement the same
//! [`vitrine_core::store::ContactStore`] trait.

mod store;

pub use store::MemStore;

#[cfg(test)]
mod tests;
