//! JSONBin document store integration.
//!
//! The player document lives in a single JSONBin v3 bin. Reading it is one
//! `GET /v3/b/<bin-id>`; the store answers with the document under `record`
//! and its own bookkeeping under `metadata`.
//!
//! ## Modules
//!
//! - [`client`]: HTTP data source
//! - [`config`]: endpoint and credentials

pub mod client;
pub mod config;

pub use client::JsonBinSource;
pub use config::{ACCESS_KEY_HEADER, DEFAULT_BIN_URL, JsonBinConfig};
