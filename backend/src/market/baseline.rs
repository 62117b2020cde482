use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

/// Last known true price (24k, currency per gram).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Baseline {
    pub price_per_gram: f64,
    /// Time of the last *successful real* fetch; `None` until one happens.
    pub fetched_at_ms: Option<u64>,
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("rejected baseline price {0}: must be finite and positive")]
pub struct PriceRejected(pub f64);

/// Shared handle to the process-wide baseline.
///
/// Writers replace the whole value, so readers never see a price from one
/// fetch paired with the timestamp of another.
#[derive(Clone, Debug)]
pub struct BaselineStore {
    inner: Arc<RwLock<Baseline>>,
}

impl BaselineStore {
    /// Seeds the store with a fallback price; the fetch time stays unset.
    pub fn new(fallback_price_per_gram: f64) -> Result<Self, PriceRejected> {
        validate(fallback_price_per_gram)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(Baseline {
                price_per_gram: fallback_price_per_gram,
                fetched_at_ms: None,
            })),
        })
    }

    pub fn current(&self) -> Baseline {
        *self.inner.read()
    }

    /// Stores a freshly fetched price. Invalid prices leave the state untouched.
    pub fn apply(&self, price_per_gram: f64, now_ms: u64) -> Result<(), PriceRejected> {
        validate(price_per_gram)?;
        *self.inner.write() = Baseline {
            price_per_gram,
            fetched_at_ms: Some(now_ms),
        };
        Ok(())
    }

    /// Milliseconds since the last real fetch, if any.
    pub fn age_ms(&self, now_ms: u64) -> Option<u64> {
        self.current()
            .fetched_at_ms
            .map(|t| now_ms.saturating_sub(t))
    }
}

fn validate(price: f64) -> Result<(), PriceRejected> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(PriceRejected(price))
    }
}
