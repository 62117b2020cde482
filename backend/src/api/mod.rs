//! HTTP surface of the price feed.

pub mod handlers;
pub mod routes;

pub use handlers::{ApiState, HealthResponse};
pub use routes::create_router;
