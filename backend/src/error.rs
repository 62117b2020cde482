use thiserror::Error;

use crate::config::ConfigError;
use crate::market::goldapi::ProviderError;

/// Startup and serving failures. Nothing on the pricing path produces these.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("provider client setup failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
