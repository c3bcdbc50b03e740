//! Screening metrics for the tender-screening system.
//!
//! This crate provides the seven statistical screening agents:
//! - CV (coefficient of variation), SPD (spread), DIFFP (two-lowest gap)
//! - RD (relative distance), SKEW, KURT
//! - KSTEST (uniformity test, exact small-sample p-value)
//!
//! plus the registry that dispatches them with an all-or-nothing
//! cardinality gate.

pub mod agent;
pub mod cv;
pub mod diffp;
pub mod kolmogorov;
pub mod kstest;
pub mod kurt;
pub mod rd;
pub mod registry;
pub mod skew;
pub mod spd;
mod stats;

pub use agent::ScreeningAgent;
pub use cv::CvAgent;
pub use diffp::DiffpAgent;
pub use kstest::KsTestAgent;
pub use kurt::KurtAgent;
pub use rd::RdAgent;
pub use registry::MetricRegistry;
pub use skew::SkewAgent;
pub use spd::SpdAgent;
