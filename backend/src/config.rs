use std::time::Duration;

use thiserror::Error;

/// Credential value shipped in docs/templates. Means "never call the provider".
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{key}: cannot parse {value:?}")]
    Parse { key: &'static str, value: String },

    #[error("{key}: {reason}")]
    OutOfRange {
        key: &'static str,
        reason: &'static str,
    },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    // =========================
    // Provider
    // =========================
    /// GoldAPI access token. `None` when unset, empty or the placeholder,
    /// which puts the feed in simulation-only mode.
    pub api_key: Option<String>,

    /// Provider base url; symbol and currency are appended as path segments.
    pub provider_url: String,
    pub symbol: String,
    pub currency: String,

    /// Minimum time between real provider calls.
    ///
    /// The provider enforces a monthly quota; 8h keeps usage around
    /// 90 calls/month regardless of how many clients are polling.
    pub refresh_interval: Duration,

    // =========================
    // Simulation
    // =========================
    /// Baseline used until the first successful fetch (currency per gram, 24k).
    pub fallback_price_per_gram: f64,

    /// Half-width of the uniform noise added to every tick.
    pub noise_amplitude: f64,

    // =========================
    // Serving
    // =========================
    pub host: String,
    pub port: u16,
    /// Directory served for paths that aren't API routes.
    pub static_dir: String,
    /// `APP_ENV`; `production` switches logs to JSON.
    pub app_env: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            provider_url: "https://www.goldapi.io/api".to_string(),
            symbol: "XAU".to_string(),
            currency: "EGP".to_string(),
            refresh_interval: Duration::from_secs(8 * 60 * 60),
            fallback_price_per_gram: 4150.0,
            noise_amplitude: 0.25,
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: "public".to_string(),
            app_env: String::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        cfg.api_key = lookup("GOLD_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty() && k != PLACEHOLDER_API_KEY);

        if let Some(v) = lookup("GOLD_API_URL") {
            cfg.provider_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = lookup("GOLD_SYMBOL") {
            cfg.symbol = v;
        }
        if let Some(v) = lookup("GOLD_CURRENCY") {
            cfg.currency = v;
        }
        if let Some(v) = lookup("BIND_HOST") {
            cfg.host = v;
        }
        if let Some(v) = lookup("STATIC_DIR") {
            cfg.static_dir = v;
        }
        if let Some(v) = lookup("APP_ENV") {
            cfg.app_env = v;
        }

        if let Some(v) = lookup("PORT") {
            cfg.port = parse("PORT", &v)?;
        }

        if let Some(v) = lookup("REFRESH_INTERVAL_SECS") {
            let secs: u64 = parse("REFRESH_INTERVAL_SECS", &v)?;
            if secs == 0 {
                return Err(ConfigError::OutOfRange {
                    key: "REFRESH_INTERVAL_SECS",
                    reason: "must be at least 1 second",
                });
            }
            cfg.refresh_interval = Duration::from_secs(secs);
        }

        if let Some(v) = lookup("FALLBACK_PRICE_PER_GRAM") {
            let price: f64 = parse("FALLBACK_PRICE_PER_GRAM", &v)?;
            if !(price.is_finite() && price > 0.0) {
                return Err(ConfigError::OutOfRange {
                    key: "FALLBACK_PRICE_PER_GRAM",
                    reason: "must be a positive number",
                });
            }
            cfg.fallback_price_per_gram = price;
        }

        if let Some(v) = lookup("NOISE_AMPLITUDE") {
            let amp: f64 = parse("NOISE_AMPLITUDE", &v)?;
            if !(amp.is_finite() && amp >= 0.0) {
                return Err(ConfigError::OutOfRange {
                    key: "NOISE_AMPLITUDE",
                    reason: "must be a non-negative number",
                });
            }
            cfg.noise_amplitude = amp;
        }

        // Keeps every tick strictly positive.
        if cfg.noise_amplitude >= cfg.fallback_price_per_gram {
            return Err(ConfigError::OutOfRange {
                key: "NOISE_AMPLITUDE",
                reason: "must be below the fallback price",
            });
        }

        Ok(cfg)
    }

    pub fn simulation_only(&self) -> bool {
        self.api_key.is_none()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Parse {
        key,
        value: value.to_string(),
    })
}
