//! The common contract shared by all metric agents.

use tender_core::{Metric, MetricResult, Result};

/// A stateless screening metric computation.
///
/// Agents validate their cardinality and degeneracy preconditions before
/// any arithmetic and fail with a descriptive error instead of returning
/// NaN or infinity. They hold no state, so distinct metrics may be
/// evaluated in parallel over the same bid list.
pub trait ScreeningAgent: Send + Sync {
    /// The metric this agent computes.
    fn metric(&self) -> Metric;

    /// Compute the metric over the consolidated bid amounts.
    fn compute(&self, bids: &[f64]) -> Result<MetricResult>;
}
