//! Excess kurtosis (KURT): tail weight of the bid distribution, using
//! the unbiased excess-kurtosis estimator.

use statrs::statistics::Statistics;

use crate::agent::ScreeningAgent;
use crate::stats::require_min;
use tender_core::{Error, Metric, MetricResult, Result};

/// KURT = n(n+1) / ((n-1)(n-2)(n-3)) * sum(z^4) - 3(n-1)^2 / ((n-2)(n-3)),
/// with z = (x - mean) / std.
pub struct KurtAgent;

impl ScreeningAgent for KurtAgent {
    fn metric(&self) -> Metric {
        Metric::Kurt
    }

    fn compute(&self, bids: &[f64]) -> Result<MetricResult> {
        require_min(Metric::Kurt, bids)?;

        let n = bids.len() as f64;
        let mean = bids.iter().mean();
        let std = bids.iter().std_dev();
        if std == 0.0 {
            return Err(Error::degenerate(
                "standard deviation is zero, KURT undefined",
            ));
        }

        let fourth_moment: f64 = bids.iter().map(|x| ((x - mean) / std).powi(4)).sum();
        let numerator = n * (n + 1.0) / ((n - 1.0) * (n - 2.0) * (n - 3.0)) * fourth_moment;
        let correction = 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0));

        Ok(MetricResult::Kurt {
            value: numerator - correction,
            mean,
            std,
            n_bids: bids.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_kurtosis() {
        // Unbiased excess kurtosis of [1, 2, 3, 4, 5] is exactly -1.2.
        let result = KurtAgent.compute(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_relative_eq!(result.value(), -1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_heavy_tail_exceeds_flat_set() {
        let flat = KurtAgent.compute(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        let tailed = KurtAgent
            .compute(&[25.0, 25.0, 25.0, 25.0, 25.0, 100.0])
            .unwrap();
        assert!(tailed.value() > flat.value());
    }

    #[test]
    fn test_constant_bids_degenerate() {
        assert!(matches!(
            KurtAgent.compute(&[5.0, 5.0, 5.0, 5.0]),
            Err(Error::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_too_few_bids() {
        assert!(matches!(
            KurtAgent.compute(&[1.0, 2.0, 3.0]),
            Err(Error::InsufficientData { .. })
        ));
    }
}
