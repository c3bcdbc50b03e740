//! Uniformity test (KSTEST): one-sample Kolmogorov-Smirnov test of the
//! min-max-normalized bids against the standard uniform distribution.
//! Bids engineered to "look spread out" tend to pass this test more
//! convincingly than genuinely independent offers.

use crate::agent::ScreeningAgent;
use crate::kolmogorov::ks_p_value;
use crate::stats::{require_min, sorted_ascending};
use tender_core::{Error, Metric, MetricResult, Result};

/// Significance level for the uniformity flag.
const UNIFORM_ALPHA: f64 = 0.05;

/// Two-sided KS statistic of the normalized bids, with exact p-value.
pub struct KsTestAgent;

impl ScreeningAgent for KsTestAgent {
    fn metric(&self) -> Metric {
        Metric::Kstest
    }

    fn compute(&self, bids: &[f64]) -> Result<MetricResult> {
        require_min(Metric::Kstest, bids)?;

        let sorted_bids = sorted_ascending(bids);
        let min_val = sorted_bids[0];
        let max_val = sorted_bids[sorted_bids.len() - 1];
        if min_val == max_val {
            return Err(Error::degenerate("all bids are equal, KSTEST undefined"));
        }

        let range = max_val - min_val;
        let sorted: Vec<f64> = sorted_bids.iter().map(|x| (x - min_val) / range).collect();

        // D = sup |ECDF - F|, where F is the U(0,1) CDF, i.e. identity
        // on the normalized values.
        let n = sorted.len() as f64;
        let mut ks_statistic = 0.0f64;
        for (i, &x) in sorted.iter().enumerate() {
            let above = (i as f64 + 1.0) / n - x;
            let below = x - i as f64 / n;
            ks_statistic = ks_statistic.max(above).max(below);
        }

        let p_value = ks_p_value(sorted.len(), ks_statistic);

        Ok(MetricResult::Kstest {
            ks_statistic,
            p_value,
            uniform_distribution: p_value > UNIFORM_ALPHA,
            n_bids: bids.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_three_evenly_spaced_bids() {
        // Normalized [0, 0.5, 1]: D = 1/3, exact p = 7/9.
        let result = KsTestAgent.compute(&[1.0, 2.0, 3.0]).unwrap();
        match result {
            MetricResult::Kstest {
                ks_statistic,
                p_value,
                uniform_distribution,
                n_bids,
            } => {
                assert_relative_eq!(ks_statistic, 1.0 / 3.0, epsilon = 1e-12);
                assert_relative_eq!(p_value, 7.0 / 9.0, epsilon = 1e-12);
                assert!(uniform_distribution);
                assert_eq!(n_bids, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_clustered_bids_reject_uniformity() {
        // Nine bids piled near the minimum, one at the top of the range.
        let bids = [
            100.0, 100.1, 100.2, 100.1, 100.3, 100.2, 100.1, 100.2, 100.3, 200.0,
        ];
        let result = KsTestAgent.compute(&bids).unwrap();
        match result {
            MetricResult::Kstest {
                p_value,
                uniform_distribution,
                ..
            } => {
                assert!(p_value < 0.05);
                assert!(!uniform_distribution);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_equal_bids_degenerate() {
        assert!(matches!(
            KsTestAgent.compute(&[7.0, 7.0, 7.0]),
            Err(Error::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_too_few_bids() {
        assert!(matches!(
            KsTestAgent.compute(&[1.0, 2.0]),
            Err(Error::InsufficientData { .. })
        ));
    }
}
