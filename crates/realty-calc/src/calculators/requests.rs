//! JSON request bodies accepted by the calculator endpoints.
//!
//! Browsers post form values, so numbers are accepted either as JSON numbers
//! or as numeric strings.

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;
use super::mortgage::{LoanType, MortgageInput};
use super::valuation::ValuationInput;

/// Optional lead details captured alongside a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default, rename = "contact_name", deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, rename = "contact_email", deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, rename = "contact_phone", deserialize_with = "lenient::text")]
    pub phone: String,
}

impl ContactDetails {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }

    /// A lead needs at least a name and an e-mail address to be followed up.
    pub fn is_actionable(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageRequest {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub property_price: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub down_payment: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub interest_rate: f64,
    #[serde(default = "default_loan_term", deserialize_with = "lenient::loan_term")]
    pub loan_term: u32,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub loan_type: Option<String>,
    #[serde(flatten)]
    pub contact: ContactDetails,
}

fn default_loan_term() -> u32 {
    MortgageInput::DEFAULT_TERM_YEARS
}

impl MortgageRequest {
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(|err| ValidationError::Malformed(err.to_string()))
    }

    pub fn into_parts(self) -> Result<(MortgageInput, ContactDetails), ValidationError> {
        let loan_type = match self.loan_type.as_deref().map(str::trim) {
            None | Some("") => LoanType::default(),
            Some(raw) => LoanType::parse(raw)?,
        };

        let input = MortgageInput {
            property_price: self.property_price,
            down_payment: self.down_payment,
            interest_rate: self.interest_rate,
            loan_term_years: self.loan_term,
            loan_type,
        };

        Ok((input, self.contact.trimmed()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationRequest {
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub state: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub zip_code: String,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub bedrooms: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub bathrooms: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub square_feet: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub year_built: Option<u32>,
    #[serde(flatten)]
    pub contact: ContactDetails,
}

impl ValuationRequest {
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(|err| ValidationError::Malformed(err.to_string()))
    }

    pub fn into_parts(self) -> (ValuationInput, ContactDetails) {
        let input = ValuationInput {
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_feet: self.square_feet,
            year_built: self.year_built,
        };
        (input, self.contact.trimmed())
    }
}

mod lenient {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub(super) fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        let parsed = match value {
            None | Some(Value::Null) => return Ok(0.0),
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(raw)) => raw.trim().parse::<f64>().ok(),
            Some(_) => None,
        };

        parsed
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| D::Error::custom("expected a finite number"))
    }

    pub(super) fn loan_term<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(optional_count(deserializer)?.unwrap_or(super::default_loan_term()))
    }

    /// Whole, non-negative count. Null and blank strings mean "not supplied".
    pub(super) fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        let parsed = match value {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::String(raw)) if raw.trim().is_empty() => return Ok(None),
            Some(Value::String(raw)) => raw.trim().parse::<u32>().ok(),
            Some(Value::Number(number)) => match number.as_u64() {
                Some(whole) => u32::try_from(whole).ok(),
                None => number
                    .as_f64()
                    .filter(|float| float.fract() == 0.0 && *float >= 0.0)
                    .filter(|float| *float <= f64::from(u32::MAX))
                    .map(|float| float as u32),
            },
            Some(_) => None,
        };

        parsed
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected a non-negative whole number"))
    }

    pub(super) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(optional_text(deserializer)?.unwrap_or_default())
    }

    pub(super) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)
    }
}
