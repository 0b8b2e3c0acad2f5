use serde::{Deserialize, Serialize};

use super::super::errors::ValidationError;
use super::super::format::format_currency;

/// Property description supplied by a homeowner. Only the address is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationInput {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub square_feet: Option<u32>,
    pub year_built: Option<u32>,
}

impl ValuationInput {
    /// Trims the address fields and rejects the first one left blank.
    pub fn normalized_address(&self) -> Result<PropertyAddress, ValidationError> {
        fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(ValidationError::MissingField(field))
            } else {
                Ok(trimmed)
            }
        }

        Ok(PropertyAddress {
            address: required(&self.address, "address")?.to_string(),
            city: required(&self.city, "city")?.to_string(),
            state: required(&self.state, "state")?.to_string(),
            zip_code: required(&self.zip_code, "zip_code")?.to_string(),
        })
    }

    pub fn supplied_bedrooms(&self) -> Option<u32> {
        supplied(self.bedrooms)
    }

    pub fn supplied_bathrooms(&self) -> Option<u32> {
        supplied(self.bathrooms)
    }

    pub fn supplied_square_feet(&self) -> Option<u32> {
        supplied(self.square_feet)
    }

    pub fn supplied_year_built(&self) -> Option<u32> {
        supplied(self.year_built)
    }
}

/// Form posts send `0` for a detail the homeowner skipped, so zero reads as absent.
fn supplied(count: Option<u32>) -> Option<u32> {
    count.filter(|value| *value > 0)
}

/// Address with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl PropertyAddress {
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip_code
        )
    }
}

/// Point estimate and band, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub estimated_value: f64,
    pub value_range_low: f64,
    pub value_range_high: f64,
    pub full_address: String,
}

impl ValuationResult {
    pub fn formatted_value_range(&self) -> String {
        format!(
            "{} - {}",
            format_currency(self.value_range_low),
            format_currency(self.value_range_high)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ValuationInput {
        ValuationInput {
            address: "  12 Elm Street ".to_string(),
            city: "Austin".to_string(),
            state: "Texas".to_string(),
            zip_code: "78701".to_string(),
            ..ValuationInput::default()
        }
    }

    #[test]
    fn full_address_joins_trimmed_fields() {
        let address = input().normalized_address().expect("address complete");
        assert_eq!(address.full_address(), "12 Elm Street, Austin, Texas 78701");
    }

    #[test]
    fn whitespace_only_field_is_missing() {
        let mut input = input();
        input.zip_code = "   ".to_string();
        assert_eq!(
            input.normalized_address(),
            Err(ValidationError::MissingField("zip_code"))
        );
    }

    #[test]
    fn zero_counts_read_as_not_supplied() {
        let details = ValuationInput {
            bedrooms: Some(0),
            bathrooms: Some(1),
            square_feet: Some(0),
            year_built: Some(0),
            ..input()
        };
        assert_eq!(details.supplied_bedrooms(), None);
        assert_eq!(details.supplied_bathrooms(), Some(1));
        assert_eq!(details.supplied_square_feet(), None);
        assert_eq!(details.supplied_year_built(), None);
    }

    #[test]
    fn formats_value_range() {
        let result = ValuationResult {
            estimated_value: 420_000.0,
            value_range_low: 378_000.0,
            value_range_high: 462_000.0,
            full_address: String::new(),
        };
        assert_eq!(result.formatted_value_range(), "$378,000.00 - $462,000.00");
    }
}
