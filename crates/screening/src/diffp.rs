//! Two-lowest-bid gap (DIFFP): how far the runner-up sits above the
//! winning bid. A suspiciously small gap can indicate cover bidding.

use crate::agent::ScreeningAgent;
use crate::stats::{require_min, sorted_ascending};
use tender_core::{Error, Metric, MetricResult, Result};

/// DIFFP = (second_lowest - lowest) / lowest.
pub struct DiffpAgent;

impl ScreeningAgent for DiffpAgent {
    fn metric(&self) -> Metric {
        Metric::Diffp
    }

    fn compute(&self, bids: &[f64]) -> Result<MetricResult> {
        require_min(Metric::Diffp, bids)?;

        let sorted = sorted_ascending(bids);
        let lowest = sorted[0];
        let second_lowest = sorted[1];
        if lowest == 0.0 {
            return Err(Error::degenerate("lowest bid is zero, DIFFP undefined"));
        }

        Ok(MetricResult::Diffp {
            value: (second_lowest - lowest) / lowest,
            lowest_bid: lowest,
            second_lowest_bid: second_lowest,
            n_bids: bids.len(),
        })
    }
}
