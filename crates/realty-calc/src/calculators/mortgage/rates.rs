use serde::{Deserialize, Serialize};

/// Annual escrow and insurance rates folded into the monthly payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EscrowRates {
    /// Share of the property price paid in property tax each year.
    pub property_tax_rate: f64,
    /// Share of the property price paid for homeowner's insurance each year.
    pub insurance_rate: f64,
    /// Share of the loan amount charged as mortgage insurance each year.
    pub pmi_rate: f64,
    /// Down payment percentage at or above which PMI is waived.
    pub pmi_waiver_down_payment_pct: f64,
}

impl EscrowRates {
    pub const fn standard() -> Self {
        Self {
            property_tax_rate: 0.012,
            insurance_rate: 0.005,
            pmi_rate: 0.005,
            pmi_waiver_down_payment_pct: 20.0,
        }
    }

    pub fn requires_pmi(&self, down_payment_percentage: f64) -> bool {
        down_payment_percentage < self.pmi_waiver_down_payment_pct
    }
}

impl Default for EscrowRates {
    fn default() -> Self {
        Self::standard()
    }
}
