pub mod api;
pub mod config;
pub mod market;
pub mod metrics;

pub mod error;
pub mod time;
