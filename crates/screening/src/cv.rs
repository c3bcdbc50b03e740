//! Coefficient of variation (CV): dispersion of bids relative to their
//! mean. Low dispersion across supposedly independent bidders is a
//! classic collusion indicator.

use statrs::statistics::Statistics;

use crate::agent::ScreeningAgent;
use crate::stats::require_min;
use tender_core::{Error, Metric, MetricResult, Result};

/// CV = sample_std / mean, with Bessel's correction (n - 1).
pub struct CvAgent;

impl ScreeningAgent for CvAgent {
    fn metric(&self) -> Metric {
        Metric::Cv
    }

    fn compute(&self, bids: &[f64]) -> Result<MetricResult> {
        require_min(Metric::Cv, bids)?;

        let mean = bids.iter().mean();
        if mean == 0.0 {
            return Err(Error::degenerate("mean of bids is zero, CV undefined"));
        }

        let std = bids.iter().std_dev();

        Ok(MetricResult::Cv {
            value: std / mean,
            mean,
            std,
            n_bids: bids.len(),
        })
    }
}
