//! Core data types for the tender-screening system.

use serde::{Deserialize, Serialize};

/// Sentinel group key for candidates with no usable bidder identifier.
///
/// All anonymous candidates compete against each other for this single
/// slot, so at most one anonymous bid survives consolidation.
pub const UNKNOWN_BIDDER: &str = "UNKNOWN_BIDDER";

/// Explicit tax treatment of an extracted amount.
///
/// Tri-state on purpose: extraction either saw an explicit statement
/// (included / excluded) or it did not (unknown). The consolidator uses
/// this only as a selection preference and never adjusts amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TaxStatus {
    /// The document explicitly states the amount includes tax.
    Included,
    /// The document explicitly states the amount excludes tax.
    Excluded,
    /// No explicit statement was found.
    #[default]
    Unknown,
}

impl From<Option<bool>> for TaxStatus {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => TaxStatus::Included,
            Some(false) => TaxStatus::Excluded,
            None => TaxStatus::Unknown,
        }
    }
}

impl From<TaxStatus> for Option<bool> {
    fn from(value: TaxStatus) -> Self {
        match value {
            TaxStatus::Included => Some(true),
            TaxStatus::Excluded => Some(false),
            TaxStatus::Unknown => None,
        }
    }
}

/// A single unverified bid extracted from tender documentation.
///
/// Produced by an upstream extraction step, never by the core. Every
/// field except `confidence` is optional because extraction output is
/// noisy; missing data stays missing (the core never infers it).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BidCandidate {
    /// Bidder identifier as it appeared in the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidder: Option<String>,
    /// Extracted amount. `None` marks the candidate invalid.
    #[serde(default)]
    pub amount: Option<f64>,
    /// Currency label, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Explicit tax treatment (`true` / `false` / absent in the wire form).
    #[serde(default)]
    pub tax_included: TaxStatus,
    /// Extraction confidence in [0, 1]; 0.0 when absent.
    #[serde(default)]
    pub confidence: f64,
    /// Verbatim excerpt the amount was extracted from (audit only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_excerpt: Option<String>,
    /// Document/chunk references (audit only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_refs: Vec<String>,
}

impl BidCandidate {
    /// Group key for consolidation: the trimmed bidder name, or the
    /// shared [`UNKNOWN_BIDDER`] sentinel when absent or blank.
    pub fn bidder_key(&self) -> &str {
        match self.bidder.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_BIDDER,
        }
    }

    /// Whether the candidate carries a usable numeric amount.
    pub fn has_valid_amount(&self) -> bool {
        self.amount.is_some_and(f64::is_finite)
    }
}

/// Output of bid consolidation: one accepted amount per surviving
/// bidder group plus a replayable audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationResult {
    /// Accepted amounts, in first-appearance order of their bidder groups.
    pub final_bids: Vec<f64>,
    /// First non-empty currency among accepted selections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Mean confidence of accepted candidates, rounded to 2 decimals.
    pub confidence: f64,
    /// One audit line per rule outcome, in group-processing order.
    pub decisions: Vec<String>,
    /// Candidates that were not selected.
    pub discarded: Vec<BidCandidate>,
}

/// Screening metric identifiers. Fixed seven-entry registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Coefficient of variation (dispersion of bids).
    Cv,
    /// Spread between highest and lowest bid.
    Spd,
    /// Relative gap between the two lowest bids.
    Diffp,
    /// Relative distance of the lowest bid from the losing bids.
    Rd,
    /// Skewness of the bid distribution.
    Skew,
    /// Excess kurtosis of the bid distribution.
    Kurt,
    /// Uniformity test of the bid distribution.
    Kstest,
}

impl Metric {
    /// All supported metrics, in registry order.
    pub const ALL: [Metric; 7] = [
        Metric::Cv,
        Metric::Spd,
        Metric::Diffp,
        Metric::Rd,
        Metric::Skew,
        Metric::Kurt,
        Metric::Kstest,
    ];

    /// Minimum number of bids the metric is defined for.
    pub fn min_n(self) -> usize {
        match self {
            Metric::Cv | Metric::Spd | Metric::Diffp => 2,
            Metric::Rd | Metric::Skew | Metric::Kstest => 3,
            Metric::Kurt => 4,
        }
    }

    /// Lowercase wire identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Cv => "cv",
            Metric::Spd => "spd",
            Metric::Diffp => "diffp",
            Metric::Rd => "rd",
            Metric::Skew => "skew",
            Metric::Kurt => "kurt",
            Metric::Kstest => "kstest",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Metric {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cv" => Ok(Metric::Cv),
            "spd" => Ok(Metric::Spd),
            "diffp" => Ok(Metric::Diffp),
            "rd" => Ok(Metric::Rd),
            "skew" => Ok(Metric::Skew),
            "kurt" => Ok(Metric::Kurt),
            "kstest" => Ok(Metric::Kstest),
            other => Err(crate::Error::UnknownMetric(other.to_string())),
        }
    }
}

/// Result of one metric agent.
///
/// Each variant carries the primary statistic plus the summary inputs
/// needed to audit the computation without recomputing it. Serializes
/// as a flat JSON object tagged with `"metric"`, safe to hand verbatim
/// to a downstream explanation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metric", rename_all = "lowercase")]
pub enum MetricResult {
    Cv {
        value: f64,
        mean: f64,
        std: f64,
        n_bids: usize,
    },
    Spd {
        value: f64,
        min_bid: f64,
        max_bid: f64,
        n_bids: usize,
    },
    Diffp {
        value: f64,
        lowest_bid: f64,
        second_lowest_bid: f64,
        n_bids: usize,
    },
    Rd {
        value: f64,
        lowest_bid: f64,
        second_lowest_bid: f64,
        std_losing_bids: f64,
        n_bids: usize,
    },
    Skew {
        value: f64,
        mean: f64,
        std: f64,
        n_bids: usize,
    },
    Kurt {
        value: f64,
        mean: f64,
        std: f64,
        n_bids: usize,
    },
    Kstest {
        ks_statistic: f64,
        p_value: f64,
        uniform_distribution: bool,
        n_bids: usize,
    },
}

impl MetricResult {
    /// The metric this result belongs to.
    pub fn metric(&self) -> Metric {
        match self {
            MetricResult::Cv { .. } => Metric::Cv,
            MetricResult::Spd { .. } => Metric::Spd,
            MetricResult::Diffp { .. } => Metric::Diffp,
            MetricResult::Rd { .. } => Metric::Rd,
            MetricResult::Skew { .. } => Metric::Skew,
            MetricResult::Kurt { .. } => Metric::Kurt,
            MetricResult::Kstest { .. } => Metric::Kstest,
        }
    }

    /// The primary statistic (the KS statistic for KSTEST).
    pub fn value(&self) -> f64 {
        match *self {
            MetricResult::Cv { value, .. }
            | MetricResult::Spd { value, .. }
            | MetricResult::Diffp { value, .. }
            | MetricResult::Rd { value, .. }
            | MetricResult::Skew { value, .. }
            | MetricResult::Kurt { value, .. } => value,
            MetricResult::Kstest { ks_statistic, .. } => ks_statistic,
        }
    }
}
