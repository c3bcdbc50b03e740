//! Configuration structures for the tender-screening system.

use serde::{Deserialize, Serialize};

/// Configuration for bid consolidation.
///
/// The core's only tunable: everything else about the algorithm is a
/// fixed contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidatorConfig {
    /// Minimum extraction confidence a candidate needs to be considered.
    /// Candidates strictly below this are filtered out per bidder group.
    pub min_confidence: f64,
}

impl Default for ConsolidatorConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.4,
        }
    }
}
