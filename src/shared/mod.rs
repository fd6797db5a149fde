//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in request and
//! response types without conversion.

pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Ticker ──────────────────────────────────────────────────────────────────

/// Exchange-qualified instrument symbol (e.g. `"AAPL_US_EQ"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<Ticker> for String {
    fn from(t: Ticker) -> Self {
        t.0
    }
}

impl FromStr for Ticker {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Ticker(s.to_string()))
    }
}

impl PartialEq<str> for Ticker {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Ticker {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for Ticker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Ticker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Ticker(s))
    }
}

// ─── Page ────────────────────────────────────────────────────────────────────

/// Cursor-paginated list envelope.
///
/// `next_page_path` is a path (with query) relative to the base URL; `None`
/// marks the last page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub next_page_path: Option<String>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_page_path: None,
        }
    }
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next_page_path
            .as_deref()
            .is_some_and(|path| !path.is_empty())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_serializes_as_plain_string() {
        let ticker = Ticker::new("AAPL_US_EQ");
        assert_eq!(serde_json::to_string(&ticker).unwrap(), r#""AAPL_US_EQ""#);
        let back: Ticker = serde_json::from_str(r#""TSLA_US_EQ""#).unwrap();
        assert_eq!(back, "TSLA_US_EQ");
    }

    #[test]
    fn test_page_last_page() {
        let page: Page<u32> = serde_json::from_str(r#"{"items":[1,2],"nextPagePath":null}"#).unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_with_next_path() {
        let page: Page<u32> = serde_json::from_str(
            r#"{"items":[],"nextPagePath":"/api/v0/equity/history/orders?cursor=5&limit=20"}"#,
        )
        .unwrap();
        assert!(page.is_empty());
        assert!(page.has_next());
    }

    #[test]
    fn test_page_missing_fields_default() {
        let page: Page<u32> = serde_json::from_str("{}").unwrap();
        assert!(page.is_empty());
        assert_eq!(page.next_page_path, None);
    }
}
