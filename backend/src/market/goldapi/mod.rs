pub mod client;
pub mod errors;
pub mod source;
pub mod types;

pub use client::GoldApiClient;
pub use errors::ProviderError;
pub use source::SpotPriceSource;
pub use types::*;
