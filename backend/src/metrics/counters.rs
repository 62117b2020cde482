use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Minimal counters for operational visibility.
///
/// Each refresh outcome has its own counter so "simulation only" and
/// "provider failed" stay distinguishable even though the request path
/// treats them the same.
#[derive(Clone, Default, Debug)]
pub struct Counters {
    pub ticks_served: Arc<AtomicU64>,

    pub refresh_not_due: Arc<AtomicU64>,
    pub refresh_in_flight: Arc<AtomicU64>,
    pub refresh_simulation_only: Arc<AtomicU64>,
    pub refresh_updated: Arc<AtomicU64>,
    pub refresh_failed: Arc<AtomicU64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub ticks_served: u64,
    pub refresh_not_due: u64,
    pub refresh_in_flight: u64,
    pub refresh_simulation_only: u64,
    pub refresh_updated: u64,
    pub refresh_failed: u64,
}

impl Counters {
    pub fn incr(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            ticks_served: self.ticks_served.load(Ordering::Relaxed),
            refresh_not_due: self.refresh_not_due.load(Ordering::Relaxed),
            refresh_in_flight: self.refresh_in_flight.load(Ordering::Relaxed),
            refresh_simulation_only: self.refresh_simulation_only.load(Ordering::Relaxed),
            refresh_updated: self.refresh_updated.load(Ordering::Relaxed),
            refresh_failed: self.refresh_failed.load(Ordering::Relaxed),
        }
    }

    /// Real provider calls made so far (successful or not).
    pub fn provider_calls(&self) -> u64 {
        let s = self.snapshot();
        s.refresh_updated + s.refresh_failed
    }
}
