//! Spread inside tender (SPD): relative range of the bid amounts.

use crate::agent::ScreeningAgent;
use crate::stats::{require_min, sorted_ascending};
use tender_core::{Error, Metric, MetricResult, Result};

/// SPD = (max_bid - min_bid) / min_bid.
pub struct SpdAgent;

impl ScreeningAgent for SpdAgent {
    fn metric(&self) -> Metric {
        Metric::Spd
    }

    fn compute(&self, bids: &[f64]) -> Result<MetricResult> {
        require_min(Metric::Spd, bids)?;

        let sorted = sorted_ascending(bids);
        let min_bid = sorted[0];
        let max_bid = sorted[sorted.len() - 1];
        if min_bid == 0.0 {
            return Err(Error::degenerate("minimum bid is zero, SPD undefined"));
        }

        Ok(MetricResult::Spd {
            value: (max_bid - min_bid) / min_bid,
            min_bid,
            max_bid,
            n_bids: bids.len(),
        })
    }
}
