//! Metric registry and batch dispatch.
//!
//! Maps each metric identifier to its calculation agent and enforces
//! the all-or-nothing batch contract: if any requested metric's
//! cardinality precondition is unmet, the whole request fails before
//! anything is computed.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::agent::ScreeningAgent;
use crate::cv::CvAgent;
use crate::diffp::DiffpAgent;
use crate::kstest::KsTestAgent;
use crate::kurt::KurtAgent;
use crate::rd::RdAgent;
use crate::skew::SkewAgent;
use crate::spd::SpdAgent;
use tender_core::{Error, Metric, MetricResult, Result};

/// Registry of the seven screening metric agents.
pub struct MetricRegistry {
    agents: HashMap<Metric, Box<dyn ScreeningAgent>>,
}

impl Default for MetricRegistry {
    fn default() -> Self {
        let agents: Vec<Box<dyn ScreeningAgent>> = vec![
            Box::new(CvAgent),
            Box::new(SpdAgent),
            Box::new(DiffpAgent),
            Box::new(RdAgent),
            Box::new(SkewAgent),
            Box::new(KurtAgent),
            Box::new(KsTestAgent),
        ];
        Self {
            agents: agents.into_iter().map(|a| (a.metric(), a)).collect(),
        }
    }
}

impl MetricRegistry {
    /// Registry with all seven agents registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the agent for a metric.
    pub fn get(&self, metric: Metric) -> Option<&dyn ScreeningAgent> {
        self.agents.get(&metric).map(|a| a.as_ref())
    }

    /// Compute a single metric.
    pub fn compute(&self, metric: Metric, bids: &[f64]) -> Result<MetricResult> {
        let agent = self
            .get(metric)
            .ok_or_else(|| Error::UnknownMetric(metric.as_str().to_string()))?;
        debug!(metric = %metric, n_bids = bids.len(), "computing screening metric");
        agent.compute(bids)
    }

    /// Compute a batch of metrics over the same bid list.
    ///
    /// Cardinality is validated for every requested metric before any
    /// agent runs; partial success is not part of the contract. Results
    /// come back keyed by metric, JSON-safe for downstream narration.
    pub fn compute_batch(
        &self,
        metrics: &[Metric],
        bids: &[f64],
    ) -> Result<BTreeMap<Metric, MetricResult>> {
        for &metric in metrics {
            let required = metric.min_n();
            if bids.len() < required {
                return Err(Error::insufficient(metric.as_str(), required, bids.len()));
            }
        }

        let mut results = BTreeMap::new();
        for &metric in metrics {
            results.insert(metric, self.compute(metric, bids)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tender_consolidation::BidConsolidator;
    use tender_core::{BidCandidate, TaxStatus};

    #[test]
    fn test_every_metric_registered() {
        let registry = MetricRegistry::new();
        for metric in Metric::ALL {
            assert!(registry.get(metric).is_some(), "missing agent for {metric}");
        }
    }

    #[test]
    fn test_batch_all_or_nothing() {
        let registry = MetricRegistry::new();
        // CV is fine with 3 bids, KURT needs 4: the whole batch fails.
        let err = registry
            .compute_batch(&[Metric::Cv, Metric::Kurt], &[10.0, 20.0, 30.0])
            .unwrap_err();
        match err {
            Error::InsufficientData {
                metric,
                required,
                provided,
            } => {
                assert_eq!(metric, "kurt");
                assert_eq!(required, 4);
                assert_eq!(provided, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_batch_computes_requested_metrics() {
        let registry = MetricRegistry::new();
        let bids = [100.0, 120.0, 150.0, 180.0];
        let results = registry
            .compute_batch(&[Metric::Cv, Metric::Spd, Metric::Diffp], &bids)
            .unwrap();

        assert_eq!(results.len(), 3);
        assert_relative_eq!(results[&Metric::Spd].value(), 0.8, epsilon = 1e-12);
        assert_relative_eq!(results[&Metric::Diffp].value(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_batch_serializes_as_plain_data() {
        let registry = MetricRegistry::new();
        let results = registry
            .compute_batch(&[Metric::Cv, Metric::Kstest], &[100.0, 120.0, 150.0])
            .unwrap();

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["cv"]["metric"], "cv");
        assert!(json["kstest"]["p_value"].is_number());
    }

    #[test]
    fn test_degenerate_input_propagates_from_agent() {
        let registry = MetricRegistry::new();
        // Cardinality passes, then SKEW hits the zero-std precondition.
        let err = registry
            .compute_batch(&[Metric::Skew], &[5.0, 5.0, 5.0, 5.0])
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateInput(_)));
    }

    fn candidate(bidder: &str, amount: f64, confidence: f64, tax: TaxStatus) -> BidCandidate {
        BidCandidate {
            bidder: Some(bidder.to_string()),
            amount: Some(amount),
            confidence,
            tax_included: tax,
            ..BidCandidate::default()
        }
    }

    #[test]
    fn test_consolidation_feeds_screening() {
        // The full pipeline: raw candidates -> consolidation -> metrics.
        let consolidator = BidConsolidator::default();
        let candidates = vec![
            candidate("Alpha", 100.0, 0.9, TaxStatus::Included),
            candidate("Alpha", 82.6, 0.5, TaxStatus::Excluded),
            candidate("Beta", 120.0, 0.8, TaxStatus::Unknown),
            candidate("Gamma", 150.0, 0.7, TaxStatus::Unknown),
            candidate("Delta", 100.0, 0.95, TaxStatus::Unknown), // duplicate of Alpha's
        ];

        let consolidated = consolidator.consolidate(&candidates).unwrap();
        assert_eq!(consolidated.final_bids, vec![100.0, 120.0, 150.0]);

        let registry = MetricRegistry::new();
        let results = registry
            .compute_batch(
                &[Metric::Cv, Metric::Diffp, Metric::Kstest],
                &consolidated.final_bids,
            )
            .unwrap();

        assert_relative_eq!(results[&Metric::Diffp].value(), 0.2, epsilon = 1e-12);
        assert!(results.contains_key(&Metric::Kstest));
    }
}
