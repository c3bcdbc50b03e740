//! Skewness (SKEW): asymmetry of the bid distribution, using the
//! adjusted Fisher-Pearson (unbiased) estimator.

use statrs::statistics::Statistics;

use crate::agent::ScreeningAgent;
use crate::stats::require_min;
use tender_core::{Error, Metric, MetricResult, Result};

/// SKEW = n / ((n - 1)(n - 2)) * sum(((x - mean) / std)^3).
pub struct SkewAgent;

impl ScreeningAgent for SkewAgent {
    fn metric(&self) -> Metric {
        Metric::Skew
    }

    fn compute(&self, bids: &[f64]) -> Result<MetricResult> {
        require_min(Metric::Skew, bids)?;

        let n = bids.len() as f64;
        let mean = bids.iter().mean();
        let std = bids.iter().std_dev();
        if std == 0.0 {
            return Err(Error::degenerate(
                "standard deviation is zero, SKEW undefined",
            ));
        }

        let third_moment: f64 = bids.iter().map(|x| ((x - mean) / std).powi(3)).sum();
        let skewness = n / ((n - 1.0) * (n - 2.0)) * third_moment;

        Ok(MetricResult::Skew {
            value: skewness,
            mean,
            std,
            n_bids: bids.len(),
        })
    }
}
