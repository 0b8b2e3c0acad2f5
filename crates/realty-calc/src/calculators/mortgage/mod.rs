//! Amortization engine: monthly principal & interest, escrow add-ons, and
//! lifetime totals for a fixed-rate loan.

pub mod domain;
mod engine;
pub mod rates;

pub use domain::{LoanType, MortgageBreakdown, MortgageInput, MortgageResult};
pub use engine::compute_mortgage;
pub use rates::EscrowRates;
