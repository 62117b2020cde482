use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use goldfeed::market::goldapi::{ProviderError, SpotPriceSource, SpotQuote};

/// Scripted provider. Each call pops the next scripted reply; once the
/// script is empty every call fails with `MissingPrice`.
#[derive(Default, Clone)]
pub struct MockSource {
    pub replies: Arc<Mutex<VecDeque<Result<f64, ProviderError>>>>,
    pub calls: Arc<AtomicUsize>,
    /// When set, each call waits for a notification before replying.
    pub hold: Option<Arc<Notify>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prices(prices: &[f64]) -> Self {
        let replies = prices.iter().copied().map(Ok).collect();
        Self {
            replies: Arc::new(Mutex::new(replies)),
            ..Self::default()
        }
    }

    pub fn held(mut self, notify: Arc<Notify>) -> Self {
        self.hold = Some(notify);
        self
    }

    pub async fn push(&self, reply: Result<f64, ProviderError>) {
        self.replies.lock().await.push_back(reply);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpotPriceSource for MockSource {
    async fn fetch_spot(&self) -> Result<SpotQuote, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(n) = &self.hold {
            n.notified().await;
        }

        let reply = self
            .replies
            .lock()
            .await
            .pop_front()
            .unwrap_or(Err(ProviderError::MissingPrice));

        // Deliberately skips payload validation so the store's own check is exercised.
        reply.map(|price_per_ounce| SpotQuote { price_per_ounce })
    }
}
