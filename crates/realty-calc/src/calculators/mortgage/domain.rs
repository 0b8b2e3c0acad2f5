use serde::{Deserialize, Serialize};

use super::super::errors::ValidationError;

/// Loan program chosen by the visitor. Recorded with the calculation; the
/// payment formula is the same for every program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    #[default]
    Conventional,
    Fha,
    Va,
    Usda,
}

impl LoanType {
    pub const fn ordered() -> [Self; 4] {
        [Self::Conventional, Self::Fha, Self::Va, Self::Usda]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Conventional => "Conventional",
            Self::Fha => "FHA",
            Self::Va => "VA",
            Self::Usda => "USDA",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Conventional => "conventional",
            Self::Fha => "fha",
            Self::Va => "va",
            Self::Usda => "usda",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.code() == normalized)
            .ok_or_else(|| ValidationError::UnknownLoanType(raw.to_string()))
    }
}

/// Inputs to the amortization engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageInput {
    pub property_price: f64,
    pub down_payment: f64,
    /// Annual rate as a percentage, e.g. `6.5` for 6.5 %.
    pub interest_rate: f64,
    pub loan_term_years: u32,
    pub loan_type: LoanType,
}

impl MortgageInput {
    pub const DEFAULT_TERM_YEARS: u32 = 30;
}

/// Unrounded engine output. Call [`MortgageResult::rounded`] before handing it
/// to a caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    pub monthly_principal_interest: f64,
    pub monthly_property_tax: f64,
    pub monthly_insurance: f64,
    pub monthly_pmi: f64,
    pub total_monthly_payment: f64,
    pub total_interest_paid: f64,
    pub total_payment: f64,
    pub loan_amount: f64,
    pub down_payment_percentage: f64,
}

/// Wire shape of a mortgage result, every figure rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageBreakdown {
    #[serde(rename = "monthly_payment")]
    pub monthly_principal_interest: f64,
    pub total_monthly_payment: f64,
    #[serde(rename = "total_interest")]
    pub total_interest_paid: f64,
    pub total_payment: f64,
    pub loan_amount: f64,
    pub down_payment_percentage: f64,
    pub monthly_property_tax: f64,
    pub monthly_insurance: f64,
    pub monthly_pmi: f64,
}
