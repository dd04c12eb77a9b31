//! Cost calculations for the quick estimate.

pub mod common;
pub mod cost_estimate;

pub use cost_estimate::CostEstimator;
