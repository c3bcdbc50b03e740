//! Relative distance (RD): the winning gap scaled by the dispersion of
//! the losing bids. An isolated low winner among tightly clustered
//! losers yields a large RD.

use statrs::statistics::Statistics;

use crate::agent::ScreeningAgent;
use crate::stats::{require_min, sorted_ascending};
use tender_core::{Error, Metric, MetricResult, Result};

/// RD = (second_lowest - lowest) / sample_std(losing bids), where the
/// losing bids are all but the lowest after an ascending sort.
pub struct RdAgent;

impl ScreeningAgent for RdAgent {
    fn metric(&self) -> Metric {
        Metric::Rd
    }

    fn compute(&self, bids: &[f64]) -> Result<MetricResult> {
        require_min(Metric::Rd, bids)?;

        let sorted = sorted_ascending(bids);
        let lowest = sorted[0];
        let second_lowest = sorted[1];
        let losing = &sorted[1..];

        let std_losing = losing.iter().std_dev();
        if std_losing == 0.0 {
            return Err(Error::degenerate(
                "standard deviation of losing bids is zero, RD undefined",
            ));
        }

        Ok(MetricResult::Rd {
            value: (second_lowest - lowest) / std_losing,
            lowest_bid: lowest,
            second_lowest_bid: second_lowest,
            std_losing_bids: std_losing,
            n_bids: bids.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_rd() {
        // losing bids [20, 30]: sample std = sqrt(50)
        // rd = (20 - 10) / sqrt(50) = sqrt(2)
        let result = RdAgent.compute(&[10.0, 20.0, 30.0]).unwrap();
        match result {
            MetricResult::Rd { value, lowest_bid, std_losing_bids, .. } => {
                assert_relative_eq!(value, 2.0_f64.sqrt(), epsilon = 1e-12);
                assert_relative_eq!(lowest_bid, 10.0, epsilon = 1e-12);
                assert_relative_eq!(std_losing_bids, 50.0_f64.sqrt(), epsilon = 1e-12);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_equal_losing_bids_degenerate() {
        assert!(matches!(
            RdAgent.compute(&[10.0, 20.0, 20.0]),
            Err(Error::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_too_few_bids() {
        assert!(matches!(
            RdAgent.compute(&[10.0, 20.0]),
            Err(Error::InsufficientData { .. })
        ));
    }
}
