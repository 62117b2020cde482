use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::market::purity::format_price;

/// Direction of the noise applied to a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Zero noise counts as "up".
    pub fn from_noise(noise: f64) -> Self {
        if noise >= 0.0 { Trend::Up } else { Trend::Down }
    }
}

/// One generated tick, full precision. Never cached or shared.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceSnapshot {
    /// 24k live price (baseline + noise).
    pub fine: f64,
    pub k21: f64,
    pub k18: f64,
    pub noise: f64,
    pub timestamp: DateTime<Utc>,
    pub trend: Trend,
}

impl PriceSnapshot {
    pub fn to_wire(&self) -> PricesResponse {
        PricesResponse {
            price24k: format_price(self.fine),
            price21k: format_price(self.k21),
            price18k: format_price(self.k18),
            timestamp: self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            trend: self.trend,
        }
    }
}

/// JSON body of `GET /api/prices`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricesResponse {
    pub price24k: String,
    pub price21k: String,
    pub price18k: String,
    /// ISO-8601, UTC, millisecond precision.
    pub timestamp: String,
    pub trend: Trend,
}
