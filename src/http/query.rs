//! Query string encoding for list/filter endpoints.
//!
//! Option structs convert themselves into a [`QueryParams`] bag, which renders a
//! canonical query suffix: keys in ascending order, `null` and empty-string
//! values dropped, every other value kept (including zeros and `false`).
//! Keys and values are form-encoded: unreserved characters pass through, a
//! space becomes `+`, everything else is percent-escaped.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Null,
    Str(String),
    Int(i32),
    Long(i64),
    Float(f64),
    Bool(bool),
    Time(DateTime<Utc>),
}

impl QueryValue {
    /// Wire representation, or `None` if the parameter must be omitted.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Str(s) if s.is_empty() => None,
            Self::Str(s) => Some(s.clone()),
            Self::Int(v) => Some(v.to_string()),
            Self::Long(v) => Some(v.to_string()),
            Self::Float(v) if v.is_infinite() => {
                Some(if *v > 0.0 { "+Inf" } else { "-Inf" }.to_string())
            }
            // `Display` for f64 is the shortest round-trip form, never exponent notation.
            Self::Float(v) => Some(v.to_string()),
            Self::Bool(v) => Some(v.to_string()),
            Self::Time(t) => Some(t.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&String> for QueryValue {
    fn from(v: &String) -> Self {
        Self::Str(v.clone())
    }
}

impl From<i32> for QueryValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f64> for QueryValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for QueryValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<DateTime<Utc>> for QueryValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Time(v)
    }
}

impl From<crate::shared::Ticker> for QueryValue {
    fn from(v: crate::shared::Ticker) -> Self {
        Self::Str(v.into())
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Parameter bag keyed by name. Iteration order is ascending by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    params: BTreeMap<String, QueryValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.params.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.get(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn encode(&self) -> String {
        encode_query(self)
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Render `params` as `?k=v&...`, or `""` when nothing survives filtering.
pub fn encode_query(params: &QueryParams) -> String {
    let pairs: Vec<String> = params
        .params
        .iter()
        .filter_map(|(key, value)| {
            value.render().map(|rendered| {
                format!("{}={}", form_encode(key), form_encode(&rendered))
            })
        })
        .collect();

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

fn form_encode(s: &str) -> String {
    urlencoding::encode(s).replace("%20", "+")
}
