//! Mock market metrics — uniform APY/TVL draws standing in for a price feed.

use rand::Rng;

use xstake_common::config::{AppConfig, MetricRange, Sampling};

/// A synthesized APY/TVL pair for one refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolMetrics {
    pub apy: f64,
    pub tvl: f64,
}

/// Draws [`PoolMetrics`] from configured ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSampler {
    apy: MetricRange,
    tvl: MetricRange,
    sampling: Sampling,
}

impl MetricSampler {
    pub fn new(apy: MetricRange, tvl: MetricRange, sampling: Sampling) -> Self {
        Self { apy, tvl, sampling }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.apy_range, config.tvl_range, config.sampling)
    }

    pub fn apy_range(&self) -> MetricRange {
        self.apy
    }

    pub fn tvl_range(&self) -> MetricRange {
        self.tvl
    }

    /// Draw a fresh pair using the thread-local RNG.
    pub fn sample(&self) -> PoolMetrics {
        self.sample_with(&mut rand::thread_rng())
    }

    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> PoolMetrics {
        PoolMetrics {
            apy: draw(rng, self.apy, self.sampling),
            tvl: draw(rng, self.tvl, self.sampling),
        }
    }
}

impl Default for MetricSampler {
    /// APY in `[3, 15]` percent, TVL in `[100_000, 10_000_000]`.
    fn default() -> Self {
        Self::new(
            MetricRange { min: 3.0, max: 15.0 },
            MetricRange {
                min: 100_000.0,
                max: 10_000_000.0,
            },
            Sampling::Continuous,
        )
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, range: MetricRange, sampling: Sampling) -> f64 {
    match sampling {
        Sampling::Continuous => {
            let raw = rng.gen_range(range.min..=range.max);
            round_cents(raw).clamp(range.min, range.max)
        }
        Sampling::Integer => {
            let lo = range.min.ceil() as i64;
            let hi = range.max.ceil() as i64;
            // No integer inside the range.
            if lo >= hi {
                return range.min;
            }
            rng.gen_range(lo..hi) as f64
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_ranges() {
        let sampler = MetricSampler::default();
        assert_eq!(sampler.apy_range().min, 3.0);
        assert_eq!(sampler.apy_range().max, 15.0);
        assert_eq!(sampler.tvl_range().min, 100_000.0);
        assert_eq!(sampler.tvl_range().max, 10_000_000.0);
    }

    #[test]
    fn test_continuous_stays_in_range_with_two_decimals() {
        let sampler = MetricSampler::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            let metrics = sampler.sample_with(&mut rng);
            assert!(sampler.apy_range().contains(metrics.apy), "apy {}", metrics.apy);
            assert!(sampler.tvl_range().contains(metrics.tvl), "tvl {}", metrics.tvl);

            let cents = metrics.apy * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_integer_mode_excludes_upper_bound() {
        let sampler = MetricSampler::new(
            MetricRange::new(3.0, 16.0).unwrap(),
            MetricRange::new(100_000.0, 10_000_000.0).unwrap(),
            Sampling::Integer,
        );
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1_000 {
            let metrics = sampler.sample_with(&mut rng);
            assert_eq!(metrics.apy.fract(), 0.0);
            assert!((3.0..16.0).contains(&metrics.apy));
            assert_eq!(metrics.tvl.fract(), 0.0);
            assert!((100_000.0..10_000_000.0).contains(&metrics.tvl));
        }
    }

    #[test]
    fn test_integer_mode_without_integer_in_range() {
        let sampler = MetricSampler::new(
            MetricRange::new(3.2, 3.8).unwrap(),
            MetricRange::new(1.0, 2.0).unwrap(),
            Sampling::Integer,
        );
        let metrics = sampler.sample_with(&mut StdRng::seed_from_u64(1));
        assert_eq!(metrics.apy, 3.2);
        assert_eq!(metrics.tvl, 1.0);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let sampler = MetricSampler::default();
        let a = sampler.sample_with(&mut StdRng::seed_from_u64(99));
        let b = sampler.sample_with(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
