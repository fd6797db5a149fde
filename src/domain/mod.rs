//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Serde records matching the REST payloads, plus request/option types
//! - `client.rs` — Sub-client with the HTTP methods for that API area

pub mod account;
pub mod history;
pub mod instrument;
pub mod order;
pub mod position;
pub mod report;
