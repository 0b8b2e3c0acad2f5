use realty_calc::calculators::valuation::{
    estimate_value, FixedJitter, JitterSource, UniformJitter, ValuationFactors, ValuationInput,
};
use realty_calc::calculators::{CalculationError, ValidationError};

const YEAR: i32 = 2024;

fn home(state: &str) -> ValuationInput {
    ValuationInput {
        address: "77 Lake Shore Dr".to_string(),
        city: "Springfield".to_string(),
        state: state.to_string(),
        zip_code: "45501".to_string(),
        bedrooms: Some(3),
        bathrooms: Some(2),
        square_feet: Some(2000),
        year_built: Some(1990),
    }
}

fn estimate(input: &ValuationInput, jitter: &dyn JitterSource) -> f64 {
    estimate_value(input, &ValuationFactors::standard(), YEAR, jitter)
        .expect("estimate succeeds")
        .estimated_value
}

#[test]
fn texas_example_without_jitter() {
    let mut input = home("Texas");
    input.year_built = None;

    assert_eq!(estimate(&input, &FixedJitter::NONE), 420_000.0);
}

#[test]
fn location_tiers_scale_the_same_home() {
    let jitter = FixedJitter::NONE;
    let per_sqft_value = 2000.0 * 175.0;

    assert_eq!(estimate(&home("New York"), &jitter), per_sqft_value * 1.5);
    assert_eq!(estimate(&home("florida"), &jitter), per_sqft_value * 1.2);
    assert_eq!(estimate(&home("INDIANA"), &jitter), per_sqft_value * 0.8);
    assert_eq!(estimate(&home("Oregon"), &jitter), per_sqft_value);
}

#[test]
fn band_brackets_every_random_estimate() {
    let jitter = UniformJitter;
    for _ in 0..200 {
        let result = estimate_value(&home("Georgia"), &ValuationFactors::standard(), YEAR, &jitter)
            .expect("estimate succeeds");
        let value = result.estimated_value;

        assert!(value >= 420_000.0 * 0.9 - 0.01 && value <= 420_000.0 * 1.1 + 0.01);
        assert!((result.value_range_low - value * 0.9).abs() <= 0.01);
        assert!((result.value_range_high - value * 1.1).abs() <= 0.01);
    }
}

#[test]
fn each_required_address_field_is_checked() {
    for field in ["address", "city", "state", "zip_code"] {
        let mut input = home("Ohio");
        match field {
            "address" => input.address.clear(),
            "city" => input.city = "\t".to_string(),
            "state" => input.state.clear(),
            _ => input.zip_code = "  ".to_string(),
        }

        let err = estimate_value(
            &input,
            &ValuationFactors::standard(),
            YEAR,
            &FixedJitter::NONE,
        )
        .expect_err("incomplete address rejected");
        assert_eq!(
            err,
            CalculationError::Validation(ValidationError::MissingField(field))
        );
    }
}
