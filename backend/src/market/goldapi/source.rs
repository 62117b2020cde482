use async_trait::async_trait;

use crate::market::goldapi::{errors::ProviderError, types::SpotQuote};

/// Anything that can produce a real spot price per fine ounce.
#[async_trait]
pub trait SpotPriceSource: Send + Sync {
    async fn fetch_spot(&self) -> Result<SpotQuote, ProviderError>;
}
