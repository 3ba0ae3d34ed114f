//! Simulated upstream latency for the mock backend
//!
//! Waiting uses `tokio::time::sleep`, so other requests keep running while a
//! mock response is "in flight".

use std::time::Duration;

use rand::{Rng, RngCore};
use tokio::time::sleep;

/// Uniform latency window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyWindow {
    min: Duration,
    max: Duration,
}

impl LatencyWindow {
    /// Window between `min` and `max`; the bounds are swapped if reversed
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// No simulated latency at all
    pub fn none() -> Self {
        Self {
            min: Duration::ZERO,
            max: Duration::ZERO,
        }
    }

    /// Window from millisecond bounds
    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self::new(Duration::from_millis(min_ms), Duration::from_millis(max_ms))
    }

    /// Whether waiting would ever take time
    pub fn is_zero(&self) -> bool {
        self.max.is_zero()
    }

    /// Lower bound
    pub fn min(&self) -> Duration {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> Duration {
        self.max
    }

    /// Draw a delay uniformly from the window
    pub fn sample(&self, rng: &mut dyn RngCore) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let min_ms = self.min.as_millis() as u64;
        let max_ms = self.max.as_millis() as u64;
        Duration::from_millis(rng.gen_range(min_ms..=max_ms))
    }
}

impl Default for LatencyWindow {
    fn default() -> Self {
        Self::from_millis(1000, 3000)
    }
}

/// Wait for `delay` without blocking the runtime
pub async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_default_window_is_one_to_three_seconds() {
        let window = LatencyWindow::default();
        assert_eq!(window.min(), Duration::from_secs(1));
        assert_eq!(window.max(), Duration::from_secs(3));
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        let window = LatencyWindow::from_millis(500, 100);
        assert_eq!(window.min(), Duration::from_millis(100));
        assert_eq!(window.max(), Duration::from_millis(500));
    }

    #[test]
    fn test_samples_stay_in_window() {
        let window = LatencyWindow::from_millis(10, 20);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let delay = window.sample(&mut rng);
            assert!(delay >= Duration::from_millis(10));
            assert!(delay <= Duration::from_millis(20));
        }
    }

    #[test]
    fn test_none_samples_zero() {
        let window = LatencyWindow::none();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(window.is_zero());
        assert_eq!(window.sample(&mut rng), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_simulate_zero_returns_immediately() {
        let start = std::time::Instant::now();
        simulate(Duration::ZERO).await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
