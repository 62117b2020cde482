use std::sync::Arc;

use axum::{Json, extract::State};
use common::logger::{TraceId, request_span};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::market::{PriceFeed, PricesResponse};
use crate::metrics::CounterSnapshot;

#[derive(Clone)]
pub struct ApiState {
    pub feed: Arc<PriceFeed>,
}

impl ApiState {
    pub fn new(feed: Arc<PriceFeed>) -> Self {
        Self { feed }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// `live` when a provider credential is configured, else `simulation`.
    pub mode: String,
    pub baseline_per_gram: String,
    /// `None` until the first successful provider fetch.
    pub baseline_age_ms: Option<u64>,
    pub refresh_interval_secs: u64,
    pub counters: CounterSnapshot,
}

/// GET /api/prices
///
/// Serves from whatever baseline is current; provider trouble never
/// surfaces here.
pub async fn get_prices(State(state): State<ApiState>) -> Json<PricesResponse> {
    let trace_id = TraceId::new();
    let span = request_span("/api/prices", &trace_id);

    let wire = span.in_scope(|| {
        let wire = state.feed.next_snapshot().to_wire();
        debug!(price24k = %wire.price24k, trend = ?wire.trend, "tick served");
        wire
    });
    span.record("outcome", "ok");

    Json(wire)
}

/// GET /health
pub async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    let feed = &state.feed;
    let refresher = feed.refresher();

    Json(HealthResponse {
        status: "ok".to_string(),
        mode: if refresher.is_simulation_only() {
            "simulation".to_string()
        } else {
            "live".to_string()
        },
        baseline_per_gram: format!("{:.2}", feed.baseline().price_per_gram),
        baseline_age_ms: feed.baseline_age_ms(),
        refresh_interval_secs: refresher.interval().as_secs(),
        counters: feed.counters().snapshot(),
    })
}
