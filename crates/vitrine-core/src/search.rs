//! Case-insensitive substring search over the portfolio catalog.

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  portfolio::{Catalog, PortfolioItem},
};

/// Tag carried by every hit from the portfolio catalog. Only one catalog
/// exists today; the filter branch in [`search`] is kept open so further
/// catalogs can be added without changing the contract.
pub const PORTFOLIO_TYPE: &str = "portfolio";

/// A catalog entry matched by a search, tagged with its catalog of origin.
/// The underlying catalog entry is copied, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
  #[serde(flatten)]
  pub item: PortfolioItem,
  #[serde(rename = "type")]
  pub kind: String,
}

/// Scan the catalog for entries matching `query`.
///
/// A hit is a case-insensitive substring match on the title, the
/// description, or any technology entry. Hits keep the catalog's insertion
/// order; there is no ranking.
///
/// An absent or empty query is rejected; a whitespace-only query is not
/// (falsy-check semantics, same as the contact validator's presence rule).
/// An absent or empty `kind` scans the portfolio catalog, as does the
/// literal `"portfolio"`; any other value yields an empty result set.
pub fn search(
  catalog: &Catalog,
  query: Option<&str>,
  kind: Option<&str>,
) -> Result<Vec<SearchHit>> {
  let query = match query {
    Some(q) if !q.is_empty() => q.to_lowercase(),
    _ => return Err(Error::MissingQuery),
  };

  let mut hits = Vec::new();
  if matches!(kind, None | Some("") | Some(PORTFOLIO_TYPE)) {
    hits.extend(
      catalog
        .items()
        .iter()
        .filter(|item| matches_item(item, &query))
        .map(|item| SearchHit {
          item: item.clone(),
          kind: PORTFOLIO_TYPE.to_owned(),
        }),
    );
  }

  Ok(hits)
}

fn matches_item(item: &PortfolioItem, query: &str) -> bool {
  item.title.to_lowercase().contains(query)
    || item.description.to_lowercase().contains(query)
    || item
      .technologies
      .iter()
      .any(|tech| tech.to_lowercase().contains(query))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn ids(hits: &[SearchHit]) -> Vec<i64> {
    hits.iter().map(|hit| hit.item.id).collect()
  }

  #[test]
  fn vue_matches_items_one_and_three_in_catalog_order() {
    let catalog = Catalog::seed();
    let hits = search(&catalog, Some("vue"), None).unwrap();
    assert_eq!(ids(&hits), [1, 3]);
    assert!(hits.iter().all(|hit| hit.kind == PORTFOLIO_TYPE));
  }

  #[test]
  fn absent_or_empty_query_is_rejected() {
    let catalog = Catalog::seed();
    assert_eq!(search(&catalog, None, None), Err(Error::MissingQuery));
    assert_eq!(search(&catalog, Some(""), None), Err(Error::MissingQuery));
  }

  #[test]
  fn whitespace_only_query_is_not_rejected() {
    // Only absence and the empty string are falsy; "   " just matches
    // nothing in the seeded catalog.
    let catalog = Catalog::seed();
    let hits = search(&catalog, Some("   "), None).unwrap();
    assert!(hits.is_empty());
  }

  #[test]
  fn unmatched_query_returns_an_empty_set() {
    let catalog = Catalog::seed();
    let hits = search(&catalog, Some("zzz-no-match"), None).unwrap();
    assert!(hits.is_empty());
  }

  #[test]
  fn matches_descriptions_and_technologies() {
    let catalog = Catalog::seed();
    // "machine learning" only appears in item 3's description.
    assert_eq!(ids(&search(&catalog, Some("machine learning"), None).unwrap()), [3]);
    // "stripe" only appears in item 1's technology list.
    assert_eq!(ids(&search(&catalog, Some("STRIPE"), None).unwrap()), [1]);
  }

  #[test]
  fn explicit_portfolio_type_scans_the_catalog() {
    let catalog = Catalog::seed();
    let hits = search(&catalog, Some("vue"), Some("portfolio")).unwrap();
    assert_eq!(ids(&hits), [1, 3]);
  }

  #[test]
  fn empty_type_counts_as_absent() {
    let catalog = Catalog::seed();
    let hits = search(&catalog, Some("vue"), Some("")).unwrap();
    assert_eq!(ids(&hits), [1, 3]);
  }

  #[test]
  fn unknown_type_yields_no_hits() {
    let catalog = Catalog::seed();
    let hits = search(&catalog, Some("vue"), Some("blog")).unwrap();
    assert!(hits.is_empty());
  }

  #[test]
  fn repeated_searches_return_identical_results() {
    let catalog = Catalog::seed();
    let first = search(&catalog, Some("vue"), None).unwrap();
    let second = search(&catalog, Some("vue"), None).unwrap();
    assert_eq!(first, second);
  }
}
