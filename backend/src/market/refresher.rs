//! Baseline refresher.
//!
//! Decides, per request, whether the baseline is stale enough to spend one
//! call of the provider's quota on it. The decision is a plain interval
//! check against the last *successful* fetch; request volume never
//! changes the provider call rate.
//!
//! Refreshes run in the background. A refresh triggered by request N may
//! complete after N has been answered, so only N+1 and later see it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use common::logger::{child_span, warn_if_slow};
use tracing::{Instrument, debug, info, warn};

use crate::market::baseline::BaselineStore;
use crate::market::goldapi::SpotPriceSource;
use crate::market::purity::ounce_to_gram;
use crate::metrics::Counters;
use crate::time::Clock;

const SLOW_FETCH: Duration = Duration::from_secs(5);

/// What a refresh attempt ended up doing.
///
/// The request path ignores this; it exists for logs, counters and tests.
#[derive(Clone, Debug, PartialEq)]
pub enum RefreshOutcome {
    /// Last real fetch is younger than the refresh interval.
    NotDue,
    /// Another refresh is still waiting on the provider.
    InFlight,
    /// No credential configured. The fetch time is left alone so a
    /// credential supplied later is used on the very next request.
    SimulationOnly,
    /// Baseline replaced with a fresh provider price.
    Updated { price_per_gram: f64 },
    /// Provider call or payload failed; baseline untouched.
    Failed(String),
}

/// Clears the in-flight flag when the attempt finishes or is dropped.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct BaselineRefresher {
    store: BaselineStore,
    source: Option<Arc<dyn SpotPriceSource>>,
    clock: Arc<dyn Clock>,
    interval: Duration,
    in_flight: Arc<AtomicBool>,
    counters: Counters,
}

impl BaselineRefresher {
    /// `source = None` runs the feed in simulation-only mode.
    pub fn new(
        store: BaselineStore,
        source: Option<Arc<dyn SpotPriceSource>>,
        clock: Arc<dyn Clock>,
        interval: Duration,
        counters: Counters,
    ) -> Self {
        Self {
            store,
            source,
            clock,
            interval,
            in_flight: Arc::new(AtomicBool::new(false)),
            counters,
        }
    }

    pub fn is_simulation_only(&self) -> bool {
        self.source.is_none()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True when no real fetch has happened yet or the last one is at
    /// least one interval old.
    pub fn is_due(&self, now_ms: u64) -> bool {
        match self.store.current().fetched_at_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval.as_millis() as u64,
        }
    }

    /// Fire-and-forget entry point used on the request path.
    ///
    /// Never blocks and never fails: gating is synchronous, and a due
    /// fetch is spawned onto the current runtime.
    pub fn maybe_refresh(self: &Arc<Self>) {
        let now = self.clock.now_ms();
        let (source, guard) = match self.gate(now) {
            Ok(claimed) => claimed,
            Err(outcome) => {
                debug!(?outcome, "baseline refresh skipped");
                return;
            }
        };

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("no async runtime available; baseline refresh skipped");
            return;
        };

        let this = Arc::clone(self);
        handle.spawn(
            async move {
                this.fetch_and_apply(source, guard, now).await;
            }
            .instrument(tracing::info_span!("baseline_refresh")),
        );
    }

    /// Awaitable variant: gate, then fetch inline if due.
    pub async fn refresh_if_due(&self) -> RefreshOutcome {
        let now = self.clock.now_ms();
        match self.gate(now) {
            Ok((source, guard)) => self.fetch_and_apply(source, guard, now).await,
            Err(outcome) => outcome,
        }
    }

    /// Synchronous part of the decision. On success the caller owns the
    /// in-flight slot until the guard is dropped.
    fn gate(
        &self,
        now_ms: u64,
    ) -> Result<(Arc<dyn SpotPriceSource>, InFlightGuard), RefreshOutcome> {
        if !self.is_due(now_ms) {
            Counters::incr(&self.counters.refresh_not_due);
            return Err(RefreshOutcome::NotDue);
        }

        let Some(source) = self.source.as_ref() else {
            Counters::incr(&self.counters.refresh_simulation_only);
            debug!("no provider credential set; using simulation baseline");
            return Err(RefreshOutcome::SimulationOnly);
        };

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            Counters::incr(&self.counters.refresh_in_flight);
            return Err(RefreshOutcome::InFlight);
        }

        Ok((Arc::clone(source), InFlightGuard(Arc::clone(&self.in_flight))))
    }

    async fn fetch_and_apply(
        &self,
        source: Arc<dyn SpotPriceSource>,
        _guard: InFlightGuard,
        now_ms: u64,
    ) -> RefreshOutcome {
        info!("fetching real price from provider");

        let fetched = warn_if_slow("provider_fetch", SLOW_FETCH, source.fetch_spot())
            .instrument(child_span("provider_fetch"))
            .await;

        let quote = match fetched {
            Ok(q) => q,
            Err(e) => {
                Counters::incr(&self.counters.refresh_failed);
                warn!(error = %e, "provider fetch failed; keeping previous baseline");
                return RefreshOutcome::Failed(e.to_string());
            }
        };

        let price_per_gram = ounce_to_gram(quote.price_per_ounce);
        if let Err(e) = self.store.apply(price_per_gram, now_ms) {
            Counters::incr(&self.counters.refresh_failed);
            warn!(error = %e, "provider price rejected; keeping previous baseline");
            return RefreshOutcome::Failed(e.to_string());
        }

        Counters::incr(&self.counters.refresh_updated);
        info!(
            price_per_ounce = quote.price_per_ounce,
            price_per_gram = %format!("{price_per_gram:.2}"),
            "baseline updated"
        );

        RefreshOutcome::Updated { price_per_gram }
    }
}
