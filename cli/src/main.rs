pub mod cli;
pub mod render;

use anyhow::Context;
use clap::Parser;
use common::logger::{LogFormat, init_logger};
use goldfeed::market::{PricesResponse, TrendTracker};
use tokio::time::{MissedTickBehavior, interval};

use cli::Cli;
use render::render_line;

async fn fetch(http: &reqwest::Client, url: &str) -> anyhow::Result<PricesResponse> {
    let resp = http.get(url).send().await?.error_for_status()?;
    Ok(resp.json().await?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger("goldfeed-watch", LogFormat::Pretty);

    let http = reqwest::Client::builder()
        .timeout(cli.interval() * 5)
        .build()
        .context("build http client")?;
    let url = cli.prices_url();

    let mut ticker = interval(cli.interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut trend = TrendTracker::new();
    let mut seen = 0u64;

    loop {
        ticker.tick().await;

        let prices = match fetch(&http, &url).await {
            Ok(p) => p,
            Err(e) => {
                // Keep polling; the server may just be restarting.
                tracing::warn!(error = %e, url = %url, "failed to fetch prices");
                continue;
            }
        };

        let Ok(k21) = prices.price21k.parse::<f64>() else {
            tracing::warn!(price21k = %prices.price21k, "unparsable 21k price");
            continue;
        };

        let display = trend.observe(k21);
        println!("{}", render_line(&prices, &display));

        seen += 1;
        if cli.count.is_some_and(|n| seen >= n) {
            break;
        }
    }

    Ok(())
}
