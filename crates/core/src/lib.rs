//! Core types and configuration for the tender-screening system.
//!
//! This crate provides shared types used across all other crates:
//! - Bid candidate and consolidation result types
//! - The screening metric registry table and result types
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::ConsolidatorConfig;
pub use error::{Error, Result};
pub use types::*;
