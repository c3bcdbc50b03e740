//! Bid consolidation: reduce raw extracted candidates to one accepted
//! amount per bidder.
//!
//! The consolidator applies a fixed rule chain per bidder group:
//! 1. Confidence floor (drop candidates below `min_confidence`)
//! 2. Tax-inclusion preference (prefer explicitly tax-inclusive offers)
//! 3. Highest-confidence selection (stable descending sort)
//! 4. Global amount deduplication across bidder groups
//!
//! It never computes or infers data that was not explicitly supplied:
//! amounts are selected, never adjusted, and every discard or acceptance
//! leaves one line in the decision trail.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use ordered_float::OrderedFloat;
use tracing::{debug, warn};

use tender_core::{
    BidCandidate, ConsolidationResult, ConsolidatorConfig, Error, Result, TaxStatus,
};

/// Consolidates structured bid candidates into a clean list of final
/// bid amounts.
#[derive(Debug)]
pub struct BidConsolidator {
    config: ConsolidatorConfig,
}

impl Default for BidConsolidator {
    fn default() -> Self {
        Self {
            config: ConsolidatorConfig::default(),
        }
    }
}

impl BidConsolidator {
    /// Create a consolidator with the given configuration.
    pub fn new(config: ConsolidatorConfig) -> Result<Self> {
        if !(0.0..=1.0).contains(&config.min_confidence) {
            return Err(Error::config(format!(
                "min_confidence must be within [0, 1], got {}",
                config.min_confidence
            )));
        }
        Ok(Self { config })
    }

    /// The configured confidence floor.
    pub fn min_confidence(&self) -> f64 {
        self.config.min_confidence
    }

    /// Consolidate an extraction payload of the form `{"bids": [...]}`.
    ///
    /// Top-level shape errors (missing field, non-array, empty array) are
    /// rejected as [`Error::EmptyInput`]. A malformed element inside an
    /// otherwise valid array is kept as an amount-less candidate and
    /// filtered by the confidence rule, so one bad extraction never sinks
    /// the whole batch.
    pub fn consolidate_payload(&self, payload: &serde_json::Value) -> Result<ConsolidationResult> {
        let bids = payload
            .get("bids")
            .and_then(|v| v.as_array())
            .ok_or(Error::EmptyInput)?;
        if bids.is_empty() {
            return Err(Error::EmptyInput);
        }

        let candidates: Vec<BidCandidate> = bids
            .iter()
            .map(|value| {
                serde_json::from_value(value.clone()).unwrap_or_else(|err| {
                    warn!(%err, "malformed bid candidate, treating as invalid");
                    BidCandidate::default()
                })
            })
            .collect();

        self.consolidate(&candidates)
    }

    /// Consolidate a list of bid candidates.
    ///
    /// Fails with [`Error::EmptyInput`] on an empty list and with
    /// [`Error::NoValidBids`] when no bidder group survives the rules.
    pub fn consolidate(&self, candidates: &[BidCandidate]) -> Result<ConsolidationResult> {
        if candidates.is_empty() {
            return Err(Error::EmptyInput);
        }

        // Group by bidder, preserving first-appearance order. The group
        // order fixes the ordering of `final_bids`.
        let mut group_index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
        for (i, candidate) in candidates.iter().enumerate() {
            let key = candidate.bidder_key();
            match group_index.get(key) {
                Some(&g) => groups[g].1.push(i),
                None => {
                    group_index.insert(key, groups.len());
                    groups.push((key, vec![i]));
                }
            }
        }

        let mut final_bids: Vec<f64> = Vec::new();
        let mut used_amounts: HashSet<OrderedFloat<f64>> = HashSet::new();
        let mut confidences: Vec<f64> = Vec::new();
        let mut currency: Option<String> = None;
        let mut decisions: Vec<String> = Vec::new();
        let mut discarded: Vec<BidCandidate> = Vec::new();

        for (bidder, members) in &groups {
            // Rule 1: numeric amount and confidence floor.
            let valid: Vec<(usize, f64)> = members
                .iter()
                .filter_map(|&i| {
                    let c = &candidates[i];
                    match c.amount {
                        Some(amount)
                            if amount.is_finite()
                                && c.confidence >= self.config.min_confidence =>
                        {
                            Some((i, amount))
                        }
                        _ => None,
                    }
                })
                .collect();

            if valid.is_empty() {
                discarded.extend(members.iter().map(|&i| candidates[i].clone()));
                decisions.push(format!(
                    "{bidder}: discarded (no candidate meets minimum confidence)"
                ));
                debug!(bidder, "group discarded at confidence floor");
                continue;
            }

            // Rule 2: prefer explicitly tax-inclusive offers. Preference
            // only; amounts are never adjusted for tax.
            let tax_inclusive: Vec<(usize, f64)> = valid
                .iter()
                .copied()
                .filter(|&(i, _)| candidates[i].tax_included == TaxStatus::Included)
                .collect();
            let pool = if tax_inclusive.is_empty() {
                &valid
            } else {
                decisions.push(format!("{bidder}: preferred offers with explicit tax included"));
                &tax_inclusive
            };

            // Rule 3: highest confidence wins. Stable sort, so equal
            // confidences keep group order and the first one wins.
            let mut ranked = pool.clone();
            ranked.sort_by_key(|&(i, _)| Reverse(OrderedFloat(candidates[i].confidence)));
            let (selected_idx, amount) = ranked[0];
            let selected = &candidates[selected_idx];

            // Rule 4: exact-equality deduplication across bidder groups.
            // An amount already accepted from another bidder is assumed to
            // be a re-extraction of the same figure.
            if used_amounts.contains(&OrderedFloat(amount)) {
                discarded.push(selected.clone());
                decisions.push(format!(
                    "{bidder}: amount {amount} discarded as duplicate across bidders"
                ));
                debug!(bidder, amount, "duplicate amount discarded");
                continue;
            }

            used_amounts.insert(OrderedFloat(amount));
            final_bids.push(amount);
            confidences.push(selected.confidence);

            if selected.tax_included == TaxStatus::Included {
                decisions.push(format!("{bidder}: selected tax-inclusive amount ({amount})"));
            } else {
                decisions.push(format!(
                    "{bidder}: selected amount without explicit tax ({amount})"
                ));
            }

            if currency.is_none() {
                if let Some(c) = selected.currency.as_deref() {
                    if !c.is_empty() {
                        currency = Some(c.to_string());
                    }
                }
            }

            // Everything else in the group was considered and passed over.
            discarded.extend(
                members
                    .iter()
                    .filter(|&&i| i != selected_idx)
                    .map(|&i| candidates[i].clone()),
            );
        }

        if final_bids.is_empty() {
            return Err(Error::NoValidBids);
        }

        let confidence = round2(confidences.iter().sum::<f64>() / confidences.len() as f64);

        debug!(
            accepted = final_bids.len(),
            discarded = discarded.len(),
            confidence,
            "consolidation complete"
        );

        Ok(ConsolidationResult {
            final_bids,
            currency,
            confidence,
            decisions,
            discarded,
        })
    }
}

/// Round to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
