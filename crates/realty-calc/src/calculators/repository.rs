use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::format::format_currency;
use super::mortgage::{MortgageInput, MortgageResult};
use super::requests::ContactDetails;
use super::valuation::{PropertyAddress, ValuationInput, ValuationResult};

/// Identifier handed back to the visitor so a follow-up can reference the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EstimationId(pub u64);

impl fmt::Display for EstimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A mortgage calculation left by a visitor who asked to be contacted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageCalculationRecord {
    pub input: MortgageInput,
    pub result: MortgageResult,
    pub contact: ContactDetails,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for MortgageCalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}yr - {}%",
            format_currency(self.input.property_price),
            self.input.loan_term_years,
            self.input.interest_rate
        )
    }
}

/// Every home-value estimate is kept, with or without contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRecord {
    pub address: PropertyAddress,
    pub input: ValuationInput,
    pub result: ValuationResult,
    pub contact: ContactDetails,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for ValuationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.address.address,
            format_currency(self.result.estimated_value)
        )
    }
}

/// Storage abstraction so calculations can be recorded without a database in tests.
pub trait CalculationRepository: Send + Sync {
    fn record_mortgage(&self, record: MortgageCalculationRecord) -> Result<(), RepositoryError>;
    fn record_valuation(&self, record: ValuationRecord) -> Result<EstimationId, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
