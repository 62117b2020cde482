use std::time::Duration;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(name = "goldfeed-watch", version)]
pub struct Cli {
    /// Base url of a running goldfeed server
    #[clap(long, env = "GOLDFEED_URL", default_value = "http://localhost:3000")]
    pub url: String,

    /// Poll cadence in milliseconds
    #[clap(long, default_value_t = 1000)]
    pub interval_ms: u64,

    /// Stop after this many successful polls (runs forever when omitted)
    #[clap(long)]
    pub count: Option<u64>,
}

impl Cli {
    pub fn prices_url(&self) -> String {
        format!("{}/api/prices", self.url.trim_end_matches('/'))
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_poll_local_server_every_second() {
        let cli = Cli::parse_from(["goldfeed-watch"]);
        assert_eq!(cli.prices_url(), "http://localhost:3000/api/prices");
        assert_eq!(cli.interval(), Duration::from_secs(1));
        assert_eq!(cli.count, None);
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let cli = Cli::parse_from(["goldfeed-watch", "--url", "http://gold:8080/", "--count", "3"]);
        assert_eq!(cli.prices_url(), "http://gold:8080/api/prices");
        assert_eq!(cli.count, Some(3));
    }
}
