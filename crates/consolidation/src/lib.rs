//! Bid consolidation for the tender-screening system.
//!
//! This crate turns noisy, duplicated bid candidates (harvested upstream
//! from unstructured tender documents) into a clean, deduplicated,
//! auditable list of final bid amounts for the screening metrics.

pub mod consolidator;

pub use consolidator::BidConsolidator;
