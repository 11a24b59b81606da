//
//  foxnose-sdk
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for FoxNose List Endpoints
//!
//! List endpoints answer in one of two shapes:
//!
//! | Shape | Example |
//! |-------|---------|
//! | Envelope ([`Page`]) | `{"count": 2, "next": null, "previous": null, "results": [..]}` |
//! | Bare array | `[..]` |
//!
//! [`Listing`] accepts both so callers do not have to know which one an
//! endpoint uses.
//!
//! # Example
//!
//! ```rust
//! use foxnose_sdk::api::common::Listing;
//!
//! let page: Listing<u32> = serde_json::from_str(
//!     r#"{"count": 3, "next": "https://api/x?page=2", "previous": null, "results": [1, 2]}"#,
//! ).unwrap();
//! assert!(page.has_next());
//! assert_eq!(page.items(), &[1, 2]);
//!
//! let bare: Listing<u32> = serde_json::from_str("[7]").unwrap();
//! assert!(!bare.has_next());
//! assert_eq!(bare.into_items(), vec![7]);
//! ```

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A page of results with links to its neighbours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages, when the server reports it.
    #[serde(default)]
    pub count: Option<u64>,

    /// URL of the next page.
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page.
    #[serde(default)]
    pub previous: Option<String>,

    /// Items in this page.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }
}

/// Either a [`Page`] envelope or a bare array.
///
/// Objects are read as envelopes and arrays as bare rows. Anything else is
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Page(Page<T>),
    Items(Vec<T>),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Listing<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            value @ Value::Array(_) => serde_json::from_value(value)
                .map(Self::Items)
                .map_err(D::Error::custom),
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(Self::Page)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "expected a page object or an array, got {}",
                other
            ))),
        }
    }
}

impl<T> Listing<T> {
    /// The rows of this listing.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Page(page) => &page.results,
            Self::Items(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Page(page) => page.results,
            Self::Items(items) => items,
        }
    }

    /// Total count reported by the server, or the number of rows for a bare
    /// array.
    pub fn count(&self) -> u64 {
        match self {
            Self::Page(page) => page.count.unwrap_or(page.results.len() as u64),
            Self::Items(items) => items.len() as u64,
        }
    }

    /// Whether the server reported a further page. Bare arrays never do.
    pub fn has_next(&self) -> bool {
        matches!(self, Self::Page(page) if page.has_next())
    }

    pub fn next_url(&self) -> Option<&str> {
        match self {
            Self::Page(page) => page.next_url(),
            Self::Items(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl<T> IntoIterator for Listing<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_items().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        key: String,
    }

    #[test]
    fn test_envelope() {
        let listing: Listing<Row> = serde_json::from_value(json!({
            "count": 5,
            "next": "https://api.example.com/v1/env/components/?page=2",
            "previous": null,
            "results": [{"key": "a"}, {"key": "b"}]
        }))
        .unwrap();

        assert_eq!(listing.count(), 5);
        assert_eq!(listing.len(), 2);
        assert!(listing.has_next());
        assert_eq!(listing.items()[1].key, "b");
    }

    #[test]
    fn test_bare_array() {
        let listing: Listing<Row> = serde_json::from_value(json!([{"key": "x"}])).unwrap();
        assert!(matches!(listing, Listing::Items(_)));
        assert_eq!(listing.count(), 1);
        assert!(listing.next_url().is_none());
        let keys: Vec<String> = listing.into_iter().map(|r| r.key).collect();
        assert_eq!(keys, vec!["x"]);
    }

    #[test]
    fn test_envelope_without_count() {
        let listing: Listing<Row> = serde_json::from_value(json!({"results": []})).unwrap();
        assert!(listing.is_empty());
        assert_eq!(listing.count(), 0);
        assert!(!listing.has_next());
    }
}
