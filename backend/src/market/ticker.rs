use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::market::baseline::Baseline;
use crate::market::noise::NoiseSource;
use crate::market::purity::Karat;
use crate::market::types::{PriceSnapshot, Trend};

/// Default noise half-width, currency units per gram.
pub const DEFAULT_NOISE_AMPLITUDE: f64 = 0.25;

/// Turns a static baseline into a plausible live tick.
///
/// Pure apart from one noise draw per call. Prices stay at full precision;
/// rounding happens only in [`PriceSnapshot::to_wire`].
#[derive(Clone)]
pub struct TickGenerator {
    noise: Arc<dyn NoiseSource>,
    amplitude: f64,
}

impl TickGenerator {
    pub fn new(noise: Arc<dyn NoiseSource>, amplitude: f64) -> Self {
        Self {
            noise,
            amplitude: amplitude.max(0.0),
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn generate(&self, baseline: &Baseline, now_ms: u64) -> PriceSnapshot {
        let noise = self.noise.sample(self.amplitude);
        let fine = baseline.price_per_gram + noise;

        PriceSnapshot {
            fine,
            k21: Karat::K21.price_from_fine(fine),
            k18: Karat::K18.price_from_fine(fine),
            noise,
            timestamp: timestamp_from_ms(now_ms),
            trend: Trend::from_noise(noise),
        }
    }
}

fn timestamp_from_ms(ms: u64) -> DateTime<Utc> {
    i64::try_from(ms)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .unwrap_or_else(Utc::now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::noise::{SequenceNoise, ThreadRngNoise};

    fn baseline(price: f64) -> Baseline {
        Baseline {
            price_per_gram: price,
            fetched_at_ms: None,
        }
    }

    #[test]
    fn applies_noise_and_derives_grades() {
        let ticks = TickGenerator::new(Arc::new(SequenceNoise::new([0.25])), 0.25);

        let snap = ticks.generate(&baseline(4000.0), 0);

        assert_eq!(snap.fine, 4000.25);
        assert_eq!(snap.k21, 4000.25 * 0.875);
        assert_eq!(snap.k18, 4000.25 * 0.75);
        assert_eq!(snap.trend, Trend::Up);

        let wire = snap.to_wire();
        assert_eq!(wire.price24k, "4000.25");
        assert_eq!(wire.price21k, "3500.22");
        assert_eq!(wire.price18k, "3000.19");
        assert_eq!(wire.timestamp, "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn negative_noise_marks_down() {
        let ticks = TickGenerator::new(Arc::new(SequenceNoise::new([-0.1, 0.0])), 0.25);
        let b = baseline(100.0);

        let first = ticks.generate(&b, 1);
        assert_eq!(first.trend, Trend::Down);
        assert_eq!(first.to_wire().price24k, "99.90");

        assert_eq!(ticks.generate(&b, 2).trend, Trend::Up);
    }

    #[test]
    fn random_ticks_stay_near_baseline() {
        let ticks = TickGenerator::new(Arc::new(ThreadRngNoise), DEFAULT_NOISE_AMPLITUDE);
        let b = baseline(99.667);

        for i in 0..1_000 {
            let s = ticks.generate(&b, i);
            assert!((s.fine - 99.667).abs() <= DEFAULT_NOISE_AMPLITUDE + 1e-12);
            assert!((s.k21 - s.fine * 0.875).abs() < 1e-9);
            assert!((s.k18 - s.fine * 0.75).abs() < 1e-9);
        }
    }

    #[test]
    fn negative_amplitude_is_clamped() {
        assert_eq!(TickGenerator::new(Arc::new(ThreadRngNoise), -1.0).amplitude(), 0.0);
    }
}
