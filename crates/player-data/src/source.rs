//! Data source abstraction consumed by the screen controller.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::types::{Metadata, PlayerDocument, PlayerRecord};

/// Outcome of one fetch, as seen by the screen.
///
/// Every failure kind collapses into `Failure { message }`; the screen only
/// needs something to show.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    Success {
        record: PlayerRecord,
        metadata: Metadata,
    },
    Failure {
        message: String,
    },
}

impl FetchResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<PlayerDocument> for FetchResult {
    fn from(document: PlayerDocument) -> Self {
        Self::Success {
            record: document.record,
            metadata: document.metadata,
        }
    }
}

impl From<FetchError> for FetchResult {
    fn from(error: FetchError) -> Self {
        Self::failure(error.to_string())
    }
}

impl From<Result<PlayerDocument, FetchError>> for FetchResult {
    fn from(result: Result<PlayerDocument, FetchError>) -> Self {
        match result {
            Ok(document) => document.into(),
            Err(error) => error.into(),
        }
    }
}

/// Source of player documents.
///
/// One call is one attempt: implementations must not retry, cache, or
/// deduplicate concurrent calls.
///
/// # Implementations
///
/// - [`crate::JsonBinSource`]: HTTP GET against a JSONBin endpoint
/// - [`crate::MockPlayerDataSource`]: scripted results for tests
#[async_trait]
pub trait PlayerDataSource: Send + Sync {
    /// Fetch the current player document.
    ///
    /// Never panics on bad input; every failure is reported as
    /// [`FetchResult::Failure`].
    async fn fetch(&self) -> FetchResult;
}
