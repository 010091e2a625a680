//! Tests for `MemStore`.

use vitrine_core::{
  contact::{AcceptedContact, ContactStatus},
  store::ContactStore,
};

use crate::MemStore;

fn accepted(name: &str) -> AcceptedContact {
  AcceptedContact {
    name:    name.to_owned(),
    email:   format!("{}@example.com", name.to_lowercase()),
    subject: "General Inquiry".to_owned(),
    message: "hello".to_owned(),
  }
}

#[tokio::test]
async fn add_assigns_id_timestamp_and_new_status() {
  let store = MemStore::new();

  let record = store.add_contact(accepted("Jane")).await.unwrap();
  assert!(record.id > 0);
  assert_eq!(record.name, "Jane");
  assert_eq!(record.status, ContactStatus::New);

  let listed = store.list_contacts().await.unwrap();
  assert_eq!(listed, vec![record]);
}

#[tokio::test]
async fn ids_are_unique_and_strictly_increasing() {
  // Several appends inside one millisecond would collide under a raw
  // timestamp scheme; the store must bump past the previous id.
  let store = MemStore::new();

  let mut ids = Vec::new();
  for name in ["a", "b", "c", "d", "e"] {
    ids.push(store.add_contact(accepted(name)).await.unwrap().id);
  }

  for pair in ids.windows(2) {
    assert!(pair[1] > pair[0], "ids not increasing: {ids:?}");
  }
}

#[tokio::test]
async fn list_preserves_insertion_order() {
  let store = MemStore::new();
  store.add_contact(accepted("First")).await.unwrap();
  store.add_contact(accepted("Second")).await.unwrap();
  store.add_contact(accepted("Third")).await.unwrap();

  let names: Vec<String> = store
    .list_contacts()
    .await
    .unwrap()
    .into_iter()
    .map(|record| record.name)
    .collect();
  assert_eq!(names, ["First", "Second", "Third"]);
}

#[tokio::test]
async fn get_contact_by_id() {
  let store = MemStore::new();
  let record = store.add_contact(accepted("Jane")).await.unwrap();

  let found = store.get_contact(record.id).await.unwrap();
  assert_eq!(found, Some(record));

  let missing = store.get_contact(1).await.unwrap();
  assert_eq!(missing, None);
}

#[tokio::test]
async fn listing_does_not_mutate_stored_records() {
  let store = MemStore::new();
  let record = store.add_contact(accepted("Jane")).await.unwrap();

  let first = store.list_contacts().await.unwrap();
  let second = store.list_contacts().await.unwrap();
  assert_eq!(first, second);
  assert_eq!(first[0], record);
}

#[tokio::test]
async fn clones_share_the_same_store() {
  let store = MemStore::new();
  let clone = store.clone();

  store.add_contact(accepted("Jane")).await.unwrap();
  assert_eq!(clone.list_contacts().await.unwrap().len(), 1);
}
