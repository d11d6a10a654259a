//! Mock data source for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::source::{FetchResult, PlayerDataSource};

/// Message returned once the script runs dry.
pub const UNSCRIPTED_MESSAGE: &str = "mock source has no scripted response";

/// Scripted data source for testing without network.
///
/// Results are handed out in the order they were pushed. A result pushed with
/// a delay completes only after that delay, which lets tests make two fetches
/// finish out of order.
#[derive(Clone, Default)]
pub struct MockPlayerDataSource {
    state: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    script: VecDeque<Scripted>,
    calls: usize,
}

struct Scripted {
    result: FetchResult,
    delay: Option<Duration>,
}

impl MockPlayerDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that answers its first fetch with `result`.
    pub fn with_result(result: FetchResult) -> Self {
        let source = Self::new();
        source.push(result);
        source
    }

    /// Queue a result that completes immediately.
    pub fn push(&self, result: FetchResult) {
        self.state.lock().unwrap().script.push_back(Scripted {
            result,
            delay: None,
        });
    }

    /// Queue a result that completes after `delay`.
    pub fn push_delayed(&self, result: FetchResult, delay: Duration) {
        self.state.lock().unwrap().script.push_back(Scripted {
            result,
            delay: Some(delay),
        });
    }

    /// Number of fetches issued so far.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }
}

#[async_trait]
impl PlayerDataSource for MockPlayerDataSource {
    async fn fetch(&self) -> FetchResult {
        let next = {
            let mut state = self.state.lock().unwrap();
            state.calls += 1;
            state.script.pop_front()
        };

        match next {
            Some(Scripted { result, delay }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => FetchResult::failure(UNSCRIPTED_MESSAGE),
        }
    }
}
