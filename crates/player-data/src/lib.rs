//! Player document model and data sources.
//!
//! This crate owns everything between the network and the screen:
//! - [`types`]: wire types for the player document and its metadata
//! - [`source`]: the [`PlayerDataSource`] trait and [`FetchResult`]
//! - [`jsonbin`]: HTTP source backed by a JSONBin bin
//! - [`mock`]: scripted source for tests
//!
//! No retries, caching, or persistence live here. A fetch is one request and
//! one decoded document (or one error message).

pub mod error;
pub mod jsonbin;
pub mod mock;
pub mod source;
pub mod types;

pub use error::{FetchError, Result};
pub use jsonbin::{JsonBinConfig, JsonBinSource};
pub use mock::MockPlayerDataSource;
pub use source::{FetchResult, PlayerDataSource};
pub use types::{InventoryItem, Metadata, PlayerDocument, PlayerRecord, Position};
