//! Shared numeric helpers for the metric agents.

use ordered_float::OrderedFloat;
use tender_core::{Metric, Result};

/// Check a metric's cardinality precondition, failing with a structured
/// error the caller can narrate (metric, required, provided).
pub fn require_min(metric: Metric, bids: &[f64]) -> Result<()> {
    let required = metric.min_n();
    if bids.len() < required {
        return Err(tender_core::Error::insufficient(
            metric.as_str(),
            required,
            bids.len(),
        ));
    }
    Ok(())
}

/// Ascending copy of the bid list. Input is never reordered in place.
pub fn sorted_ascending(bids: &[f64]) -> Vec<f64> {
    let mut sorted = bids.to_vec();
    sorted.sort_by_key(|&x| OrderedFloat(x));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use tender_core::Error;

    #[test]
    fn test_require_min() {
        assert!(require_min(Metric::Cv, &[1.0, 2.0]).is_ok());
        let err = require_min(Metric::Kurt, &[1.0, 2.0]).unwrap_err();
        match err {
            Error::InsufficientData {
                metric,
                required,
                provided,
            } => {
                assert_eq!(metric, "kurt");
                assert_eq!(required, 4);
                assert_eq!(provided, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_sorted_ascending_leaves_input_alone() {
        let bids = [30.0, 10.0, 20.0];
        let sorted = sorted_ascending(&bids);
        assert_eq!(sorted, vec![10.0, 20.0, 30.0]);
        assert_eq!(bids, [30.0, 10.0, 20.0]);
    }
}
