use std::collections::VecDeque;

use parking_lot::Mutex;
use rand::Rng;

/// Random source for tick noise.
pub trait NoiseSource: Send + Sync {
    /// Uniform draw from `[-amplitude, +amplitude]`.
    fn sample(&self, amplitude: f64) -> f64;
}

/// Thread-local RNG; the production source.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngNoise;

impl NoiseSource for ThreadRngNoise {
    fn sample(&self, amplitude: f64) -> f64 {
        if amplitude <= 0.0 {
            return 0.0;
        }
        // Scaling a unit draw stays finite for any finite amplitude.
        (rand::rng().random::<f64>() * 2.0 - 1.0) * amplitude
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Values are used as-is (not scaled by the amplitude) so tests can
/// assert exact outputs.
#[derive(Debug)]
pub struct SequenceNoise {
    draws: Mutex<VecDeque<f64>>,
}

impl SequenceNoise {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: Mutex::new(draws.into_iter().collect()),
        }
    }
}

impl NoiseSource for SequenceNoise {
    fn sample(&self, _amplitude: f64) -> f64 {
        let mut draws = self.draws.lock();
        let Some(next) = draws.pop_front() else {
            return 0.0;
        };
        draws.push_back(next);
        next
    }
}
