//! Mock home-value estimator driven by static adjustment tables.

pub mod domain;
mod heuristic;
pub mod jitter;
pub mod tables;

pub use domain::{PropertyAddress, ValuationInput, ValuationResult};
pub use heuristic::{base_estimate, estimate_value};
pub use jitter::{FixedJitter, JitterSource, SeededJitter, UniformJitter};
pub use tables::{location_multiplier, ValuationFactors, LOCATION_TIERS};
