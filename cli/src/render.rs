use goldfeed::market::{PricesResponse, TrendDisplay};

/// One status line: the three grades plus the 21k trend.
pub fn render_line(prices: &PricesResponse, trend: &TrendDisplay) -> String {
    format!(
        "{}  21k {:>10}  24k {:>10}  18k {:>10}  {} {}",
        prices.timestamp,
        prices.price21k,
        prices.price24k,
        prices.price18k,
        trend.arrow(),
        trend
    )
    .trim_end()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldfeed::market::Trend;

    fn prices() -> PricesResponse {
        PricesResponse {
            price24k: "4150.12".into(),
            price21k: "3631.36".into(),
            price18k: "3112.59".into(),
            timestamp: "2023-11-14T22:13:20.123Z".into(),
            trend: Trend::Up,
        }
    }

    #[test]
    fn renders_rising_delta() {
        let line = render_line(&prices(), &TrendDisplay::Rising(2.5));
        assert!(line.contains("21k    3631.36"));
        assert!(line.ends_with("▲ +2.50"));
    }

    #[test]
    fn first_line_has_no_trend() {
        let line = render_line(&prices(), &TrendDisplay::Neutral);
        assert!(line.ends_with("18k    3112.59"));
    }
}
