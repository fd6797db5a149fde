//! HTTP layer — authenticated request pipeline and query string encoding.
//!
//! The query encoder has no transport dependency and is always available; the
//! request pipeline requires the `http` feature.

#[cfg(feature = "http")]
pub mod client;
pub mod query;

#[cfg(feature = "http")]
pub use client::{Trading212Http, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
pub use query::{encode_query, QueryParams, QueryValue};
