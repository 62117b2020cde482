use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, instrument};

use crate::market::goldapi::errors::ProviderError;
use crate::market::goldapi::source::SpotPriceSource;
use crate::market::goldapi::types::{SpotEnvelope, SpotQuote};

const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// GoldAPI spot-price client for one symbol/currency pair.
#[derive(Clone)]
pub struct GoldApiClient {
    http: Client,
    url: String,
}

impl GoldApiClient {
    /// No request timeout is set: a hung call only delays that refresh.
    pub fn new(
        base_url: &str,
        symbol: &str,
        currency: &str,
        api_key: &str,
    ) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        let mut token =
            HeaderValue::from_str(api_key).map_err(|_| ProviderError::InvalidCredential)?;
        token.set_sensitive(true);
        headers.insert(ACCESS_TOKEN_HEADER, token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(30))
            .build()?;

        let url = format!("{}/{}/{}", base_url.trim_end_matches('/'), symbol, currency);

        Ok(Self { http, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SpotPriceSource for GoldApiClient {
    #[instrument(skip(self), fields(url = %self.url), level = "debug")]
    async fn fetch_spot(&self) -> Result<SpotQuote, ProviderError> {
        let resp = self.http.get(&self.url).send().await?.error_for_status()?;

        let envelope: SpotEnvelope = resp.json().await?;
        let quote = envelope.into_quote()?;

        debug!(price_per_ounce = quote.price_per_ounce, "goldapi spot fetched");

        Ok(quote)
    }
}
