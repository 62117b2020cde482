//! Client-side trend indicator.
//!
//! Compares each received price with the previous one. Unlike
//! [`Trend`](crate::market::types::Trend) on a snapshot, this depends only
//! on the sequence the client has observed.

use std::fmt;

/// What a client shows next to the price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrendDisplay {
    /// First observation; nothing to compare against.
    Neutral,
    Stable,
    Rising(f64),
    Falling(f64),
}

impl fmt::Display for TrendDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDisplay::Neutral => Ok(()),
            TrendDisplay::Stable => f.write_str("Stable"),
            TrendDisplay::Rising(d) => write!(f, "+{d:.2}"),
            TrendDisplay::Falling(d) => write!(f, "{d:.2}"),
        }
    }
}

impl TrendDisplay {
    pub fn arrow(&self) -> &'static str {
        match self {
            TrendDisplay::Neutral => " ",
            TrendDisplay::Stable => "⬌",
            TrendDisplay::Rising(_) => "▲",
            TrendDisplay::Falling(_) => "▼",
        }
    }
}

/// Remembers the last observed price for one client session.
#[derive(Clone, Debug, Default)]
pub struct TrendTracker {
    previous: Option<f64>,
}

impl TrendTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous(&self) -> Option<f64> {
        self.previous
    }

    /// Records `price` and classifies it against the previous observation.
    /// The remembered value is always replaced.
    pub fn observe(&mut self, price: f64) -> TrendDisplay {
        let Some(prev) = self.previous.replace(price) else {
            return TrendDisplay::Neutral;
        };

        // Prices arrive as two-decimal strings; compare in whole cents.
        let delta_cents = (price * 100.0).round() - (prev * 100.0).round();
        let delta = delta_cents / 100.0;

        if delta_cents > 0.0 {
            TrendDisplay::Rising(delta)
        } else if delta_cents < 0.0 {
            TrendDisplay::Falling(delta)
        } else {
            TrendDisplay::Stable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_through_all_states() {
        let mut t = TrendTracker::new();

        let states: Vec<_> = [100.00, 100.00, 102.50, 101.00]
            .into_iter()
            .map(|p| t.observe(p))
            .collect();

        assert_eq!(
            states,
            vec![
                TrendDisplay::Neutral,
                TrendDisplay::Stable,
                TrendDisplay::Rising(2.5),
                TrendDisplay::Falling(-1.5),
            ]
        );
        assert_eq!(t.previous(), Some(101.0));
    }

    #[test]
    fn renders_like_the_dashboard() {
        assert_eq!(TrendDisplay::Neutral.to_string(), "");
        assert_eq!(TrendDisplay::Stable.to_string(), "Stable");
        assert_eq!(TrendDisplay::Rising(2.5).to_string(), "+2.50");
        assert_eq!(TrendDisplay::Falling(-1.5).to_string(), "-1.50");
    }

    #[test]
    fn float_noise_below_a_cent_is_stable() {
        let mut t = TrendTracker::new();
        t.observe(3631.36);
        assert_eq!(t.observe(3631.36 + 1e-9), TrendDisplay::Stable);
    }

    #[test]
    fn previous_is_updated_after_every_observation() {
        let mut t = TrendTracker::new();
        t.observe(10.0);
        t.observe(12.0);
        assert_eq!(t.observe(11.0), TrendDisplay::Falling(-1.0));
        assert_eq!(t.previous(), Some(11.0));
    }
}
