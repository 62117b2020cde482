use std::sync::Arc;

use crate::config::{AppConfig, ConfigError};
use crate::error::AppError;
use crate::market::baseline::{Baseline, BaselineStore};
use crate::market::goldapi::{GoldApiClient, SpotPriceSource};
use crate::market::noise::ThreadRngNoise;
use crate::market::refresher::BaselineRefresher;
use crate::market::ticker::TickGenerator;
use crate::market::types::PriceSnapshot;
use crate::metrics::Counters;
use crate::time::{Clock, SystemClock};

/// Request-path entry point: poke the refresher, then tick off whatever
/// baseline is current.
pub struct PriceFeed {
    store: BaselineStore,
    refresher: Arc<BaselineRefresher>,
    ticks: TickGenerator,
    clock: Arc<dyn Clock>,
    counters: Counters,
}

impl PriceFeed {
    pub fn new(
        store: BaselineStore,
        refresher: Arc<BaselineRefresher>,
        ticks: TickGenerator,
        clock: Arc<dyn Clock>,
        counters: Counters,
    ) -> Self {
        Self {
            store,
            refresher,
            ticks,
            clock,
            counters,
        }
    }

    /// Wires the production feed: system clock, thread RNG, and a GoldAPI
    /// client when a credential is configured.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, AppError> {
        let store = BaselineStore::new(cfg.fallback_price_per_gram).map_err(|_| {
            ConfigError::OutOfRange {
                key: "FALLBACK_PRICE_PER_GRAM",
                reason: "must be a positive number",
            }
        })?;

        let source: Option<Arc<dyn SpotPriceSource>> = match cfg.api_key.as_deref() {
            Some(key) => {
                let client =
                    GoldApiClient::new(&cfg.provider_url, &cfg.symbol, &cfg.currency, key)?;
                Some(Arc::new(client) as Arc<dyn SpotPriceSource>)
            }
            None => None,
        };

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let counters = Counters::default();

        let refresher = Arc::new(BaselineRefresher::new(
            store.clone(),
            source,
            Arc::clone(&clock),
            cfg.refresh_interval,
            counters.clone(),
        ));
        let ticks = TickGenerator::new(Arc::new(ThreadRngNoise), cfg.noise_amplitude);

        Ok(Self::new(store, refresher, ticks, clock, counters))
    }

    /// Never waits on the provider. A refresh started here is only visible
    /// to later calls.
    pub fn next_snapshot(&self) -> PriceSnapshot {
        self.refresher.maybe_refresh();

        let baseline = self.store.current();
        let snapshot = self.ticks.generate(&baseline, self.clock.now_ms());

        Counters::incr(&self.counters.ticks_served);
        snapshot
    }

    pub fn baseline(&self) -> Baseline {
        self.store.current()
    }

    pub fn baseline_age_ms(&self) -> Option<u64> {
        self.store.age_ms(self.clock.now_ms())
    }

    pub fn refresher(&self) -> &Arc<BaselineRefresher> {
        &self.refresher
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }
}
