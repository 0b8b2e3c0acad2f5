use tracing::debug;

use super::super::errors::ComputationError;
use super::super::format::round_cents;
use super::domain::{MortgageBreakdown, MortgageInput, MortgageResult};
use super::rates::EscrowRates;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Fixed-rate amortization plus escrow estimates.
///
/// Zero-rate, zero-term, and non-positive loans are not amortized: their
/// principal & interest payment is reported as `0`. So are rates below the
/// precision of `f64`.
pub fn compute_mortgage(
    input: &MortgageInput,
    rates: &EscrowRates,
) -> Result<MortgageResult, ComputationError> {
    let MortgageInput {
        property_price,
        down_payment,
        interest_rate,
        loan_term_years,
        loan_type,
    } = *input;

    let loan_amount = property_price - down_payment;
    let down_payment_percentage = if property_price > 0.0 {
        down_payment / property_price * 100.0
    } else {
        0.0
    };

    let monthly_rate = interest_rate / 100.0 / MONTHS_PER_YEAR;
    let num_payments = f64::from(loan_term_years) * MONTHS_PER_YEAR;

    // A rate too small to move `1 + r` off 1.0 is treated like a zero rate.
    let growth = (1.0 + monthly_rate).powf(num_payments);
    let monthly_principal_interest = if growth > 1.0 && loan_amount > 0.0 {
        loan_amount * (monthly_rate * growth) / (growth - 1.0)
    } else {
        0.0
    };

    let total_payment = monthly_principal_interest * num_payments;
    let total_interest_paid = total_payment - loan_amount;

    let monthly_property_tax = property_price * rates.property_tax_rate / MONTHS_PER_YEAR;
    let monthly_insurance = property_price * rates.insurance_rate / MONTHS_PER_YEAR;
    let monthly_pmi = if rates.requires_pmi(down_payment_percentage) {
        loan_amount * rates.pmi_rate / MONTHS_PER_YEAR
    } else {
        0.0
    };

    let total_monthly_payment =
        monthly_principal_interest + monthly_property_tax + monthly_insurance + monthly_pmi;

    debug!(
        loan_type = loan_type.code(),
        loan_term_years,
        monthly_rate,
        pmi_applied = (monthly_pmi != 0.0),
        "mortgage computed"
    );

    let finite = |field, value| ComputationError::ensure_finite("mortgage", field, value);
    Ok(MortgageResult {
        monthly_principal_interest: finite("monthly_principal_interest", monthly_principal_interest)?,
        monthly_property_tax: finite("monthly_property_tax", monthly_property_tax)?,
        monthly_insurance: finite("monthly_insurance", monthly_insurance)?,
        monthly_pmi: finite("monthly_pmi", monthly_pmi)?,
        total_monthly_payment: finite("total_monthly_payment", total_monthly_payment)?,
        total_interest_paid: finite("total_interest_paid", total_interest_paid)?,
        total_payment: finite("total_payment", total_payment)?,
        loan_amount: finite("loan_amount", loan_amount)?,
        down_payment_percentage: finite("down_payment_percentage", down_payment_percentage)?,
    })
}

impl MortgageResult {
    pub fn rounded(&self) -> MortgageBreakdown {
        MortgageBreakdown {
            monthly_principal_interest: round_cents(self.monthly_principal_interest),
            total_monthly_payment: round_cents(self.total_monthly_payment),
            total_interest_paid: round_cents(self.total_interest_paid),
            total_payment: round_cents(self.total_payment),
            loan_amount: round_cents(self.loan_amount),
            down_payment_percentage: round_cents(self.down_payment_percentage),
            monthly_property_tax: round_cents(self.monthly_property_tax),
            monthly_insurance: round_cents(self.monthly_insurance),
            monthly_pmi: round_cents(self.monthly_pmi),
        }
    }
}
