use std::sync::Arc;

use chrono::{Datelike, Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::errors::{CalculationError, ComputationError, ValidationError};
use super::mortgage::{compute_mortgage, EscrowRates, MortgageBreakdown};
use super::repository::{
    CalculationRepository, EstimationId, MortgageCalculationRecord, RepositoryError,
    ValuationRecord,
};
use super::requests::{MortgageRequest, ValuationRequest};
use super::valuation::{estimate_value, JitterSource, ValuationFactors, ValuationResult};

/// Service composing both calculators with the calculation repository.
pub struct CalculatorService<R> {
    repository: Arc<R>,
    jitter: Arc<dyn JitterSource>,
    rates: EscrowRates,
    factors: ValuationFactors,
    reference_year: Option<i32>,
}

/// Estimate returned to the visitor, tagged with the stored record's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationEstimate {
    #[serde(flatten)]
    pub result: ValuationResult,
    pub estimation_id: EstimationId,
}

impl<R> CalculatorService<R>
where
    R: CalculationRepository + 'static,
{
    pub fn new(repository: Arc<R>, jitter: Arc<dyn JitterSource>) -> Self {
        Self {
            repository,
            jitter,
            rates: EscrowRates::standard(),
            factors: ValuationFactors::standard(),
            reference_year: None,
        }
    }

    /// Pins the year used to age properties instead of reading the clock.
    pub fn with_reference_year(mut self, reference_year: Option<i32>) -> Self {
        self.reference_year = reference_year;
        self
    }

    pub fn with_tables(mut self, rates: EscrowRates, factors: ValuationFactors) -> Self {
        self.rates = rates;
        self.factors = factors;
        self
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
            .unwrap_or_else(|| Local::now().date_naive().year())
    }

    /// Computes a payment breakdown, recording it when the visitor left contact details.
    pub fn calculate_mortgage(
        &self,
        request: MortgageRequest,
    ) -> Result<MortgageBreakdown, CalculatorServiceError> {
        let (input, contact) = request.into_parts()?;
        let result = compute_mortgage(&input, &self.rates)?;

        if contact.is_actionable() {
            self.repository.record_mortgage(MortgageCalculationRecord {
                input,
                result,
                contact,
                created_at: Utc::now(),
            })?;
            info!("mortgage calculation recorded for follow-up");
        }

        Ok(result.rounded())
    }

    /// Estimates a home's value and records the estimate.
    pub fn estimate_value(
        &self,
        request: ValuationRequest,
    ) -> Result<ValuationEstimate, CalculatorServiceError> {
        let (input, contact) = request.into_parts();
        let address = input.normalized_address()?;
        let result = estimate_value(
            &input,
            &self.factors,
            self.reference_year(),
            self.jitter.as_ref(),
        )?;

        let estimation_id = self.repository.record_valuation(ValuationRecord {
            address,
            input,
            result: result.clone(),
            contact,
            created_at: Utc::now(),
        })?;
        info!(%estimation_id, "home value estimate recorded");

        Ok(ValuationEstimate {
            result,
            estimation_id,
        })
    }
}

/// Error raised by the calculator service.
#[derive(Debug, thiserror::Error)]
pub enum CalculatorServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Computation(#[from] ComputationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<CalculationError> for CalculatorServiceError {
    fn from(value: CalculationError) -> Self {
        match value {
            CalculationError::Validation(err) => Self::Validation(err),
            CalculationError::Computation(err) => Self::Computation(err),
        }
    }
}
