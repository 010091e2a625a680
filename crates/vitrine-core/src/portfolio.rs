//! The portfolio catalog — seeded at startup, read-only for the life of the
//! process.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Delivery status of a portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
  Completed,
  #[serde(rename = "In Progress")]
  InProgress,
}

/// A single portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
  pub id:           i64,
  pub title:        String,
  pub description:  String,
  /// Ordered; search matches against every entry.
  pub technologies: Vec<String>,
  pub status:       ProjectStatus,
  pub year:         u16,
}

/// The read-only list of portfolio entries.
///
/// Fixed at process start; there is no mutation API. Insertion order is the
/// order every listing and search result preserves.
#[derive(Debug, Clone)]
pub struct Catalog {
  items: Vec<PortfolioItem>,
}

impl Catalog {
  pub fn new(items: Vec<PortfolioItem>) -> Self {
    Self { items }
  }

  /// The project list served by the site.
  pub fn seed() -> Self {
    Self::new(vec![
      PortfolioItem {
        id:           1,
        title:        "E-commerce Platform".to_owned(),
        description:  "Modern Vue.js e-commerce application with payment integration".to_owned(),
        technologies: strings(&["Vue.js", "Node.js", "PostgreSQL", "Stripe"]),
        status:       ProjectStatus::Completed,
        year:         2024,
      },
      PortfolioItem {
        id:           2,
        title:        "Task Management System".to_owned(),
        description:  "Full-stack productivity application with real-time collaboration".to_owned(),
        technologies: strings(&["React", "Express", "MongoDB", "Socket.io"]),
        status:       ProjectStatus::InProgress,
        year:         2024,
      },
      PortfolioItem {
        id:           3,
        title:        "AI Content Generator".to_owned(),
        description:  "Machine learning powered content creation tool".to_owned(),
        technologies: strings(&["Python", "FastAPI", "TensorFlow", "Vue.js"]),
        status:       ProjectStatus::Completed,
        year:         2023,
      },
    ])
  }

  /// All entries in insertion order.
  pub fn items(&self) -> &[PortfolioItem] {
    &self.items
  }

  /// Look up a single entry by id.
  pub fn get(&self, id: i64) -> Result<&PortfolioItem> {
    self
      .items
      .iter()
      .find(|item| item.id == id)
      .ok_or(Error::ItemNotFound(id))
  }
}

fn strings(values: &[&str]) -> Vec<String> {
  values.iter().map(|s| (*s).to_owned()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn get_returns_the_item_unchanged() {
    let catalog = Catalog::seed();
    let item = catalog.get(2).unwrap();
    assert_eq!(item.title, "Task Management System");
    assert_eq!(item.status, ProjectStatus::InProgress);
    assert_eq!(item, &catalog.items()[1]);
  }

  #[test]
  fn get_missing_id_fails() {
    let catalog = Catalog::seed();
    assert_eq!(catalog.get(99), Err(Error::ItemNotFound(99)));
  }
}
