use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("access token is not a valid header value")]
    InvalidCredential,

    #[error("provider response has no usable price field")]
    MissingPrice,

    #[error("provider returned non-positive price {0}")]
    NonPositivePrice(f64),
}
