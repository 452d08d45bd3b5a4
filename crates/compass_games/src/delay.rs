//! The opponent's cosmetic thinking pause.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::Duration;
use tracing::{debug, instrument};

/// Sleeps a randomly chosen duration before each opponent move.
///
/// Purely presentational: the opponent has already decided by the time
/// the pause matters to anyone.
#[derive(Debug, Clone)]
pub struct ThinkDelay {
    options: Vec<Duration>,
    rng: StdRng,
}

impl ThinkDelay {
    /// Picks from `options_ms` using `rng`.
    pub fn new(options_ms: &[u64], rng: StdRng) -> Self {
        Self {
            options: options_ms.iter().map(|&ms| Duration::from_millis(ms)).collect(),
            rng,
        }
    }

    /// Picks from `options_ms` with an entropy-seeded generator.
    pub fn from_entropy(options_ms: &[u64]) -> Self {
        Self::new(options_ms, StdRng::from_entropy())
    }

    /// A delay that never pauses.
    pub fn none() -> Self {
        Self::from_entropy(&[])
    }

    /// Draws the next pause length, if any are configured.
    pub fn sample(&mut self) -> Option<Duration> {
        self.options.choose(&mut self.rng).copied()
    }

    /// Blocks the current thread for one sampled pause.
    #[instrument(skip(self))]
    pub fn pause(&mut self) {
        if let Some(duration) = self.sample() {
            debug!(millis = duration.as_millis() as u64, "Opponent thinking");
            std::thread::sleep(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_come_from_options() {
        let mut delay = ThinkDelay::new(&[200, 600], StdRng::seed_from_u64(5));
        for _ in 0..20 {
            let sample = delay.sample().unwrap();
            assert!(sample == Duration::from_millis(200) || sample == Duration::from_millis(600));
        }
    }

    #[test]
    fn test_no_options_never_pauses() {
        let mut delay = ThinkDelay::none();
        assert_eq!(delay.sample(), None);
        delay.pause();
    }
}
