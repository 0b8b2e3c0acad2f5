//! The two brokerage calculators and the plumbing that serves them.
//!
//! [`mortgage`] and [`valuation`] hold the pure computations. [`service`]
//! parses requests, applies the calculators, and records leads through a
//! [`repository::CalculationRepository`]; [`router`] exposes the service over HTTP.

pub mod errors;
pub mod format;
pub mod mortgage;
pub mod repository;
pub mod requests;
pub mod router;
pub mod service;
pub mod valuation;

#[cfg(test)]
mod tests;

pub use errors::{CalculationError, ComputationError, ValidationError};
pub use repository::{
    CalculationRepository, EstimationId, MortgageCalculationRecord, RepositoryError,
    ValuationRecord,
};
pub use requests::{ContactDetails, MortgageRequest, ValuationRequest};
pub use router::calculator_router;
pub use service::{CalculatorService, CalculatorServiceError, ValuationEstimate};
