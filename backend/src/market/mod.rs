//! Hybrid pricing engine.
//!
//! A rarely refreshed baseline (real provider price) plus a per-request
//! simulated tick on top of it:
//!
//! Provider → Refresher → BaselineStore → TickGenerator → PriceSnapshot

pub mod baseline;
pub mod feed;
pub mod goldapi;
pub mod noise;
pub mod purity;
pub mod refresher;
pub mod ticker;
pub mod trend;
pub mod types;

pub use baseline::{Baseline, BaselineStore, PriceRejected};
pub use feed::PriceFeed;
pub use noise::{NoiseSource, SequenceNoise, ThreadRngNoise};
pub use purity::Karat;
pub use refresher::{BaselineRefresher, RefreshOutcome};
pub use ticker::TickGenerator;
pub use trend::{TrendDisplay, TrendTracker};
pub use types::{PriceSnapshot, PricesResponse, Trend};
