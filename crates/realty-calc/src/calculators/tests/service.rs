use super::common::*;
use std::sync::Arc;

use crate::calculators::mortgage::{EscrowRates, LoanType};
use crate::calculators::valuation::{FixedJitter, SeededJitter, ValuationFactors};
use crate::calculators::{
    CalculatorService, CalculatorServiceError, MortgageRequest, ValidationError, ValuationRequest,
};

fn mortgage_request() -> MortgageRequest {
    MortgageRequest {
        property_price: 300_000.0,
        down_payment: 30_000.0,
        interest_rate: 6.0,
        loan_term: 30,
        loan_type: Some("usda".to_string()),
        contact: Default::default(),
    }
}

fn valuation_request() -> ValuationRequest {
    serde_json::from_value(texas_valuation_body()).expect("valid request")
}

#[test]
fn mortgage_without_contact_is_not_recorded() {
    let (service, repository) = build_service();

    let breakdown = service
        .calculate_mortgage(mortgage_request())
        .expect("calculates");

    assert_eq!(breakdown.down_payment_percentage, 10.0);
    assert_eq!(breakdown.monthly_pmi, 112.5);
    assert_eq!(repository.mortgage_count(), 0);
}

#[test]
fn mortgage_needs_name_and_email_to_be_recorded() {
    let (service, repository) = build_service();

    let mut request = mortgage_request();
    request.contact.name = "Avery".to_string();
    service.calculate_mortgage(request).expect("calculates");
    assert_eq!(repository.mortgage_count(), 0);

    let mut request = mortgage_request();
    request.contact.name = "Avery".to_string();
    request.contact.email = "avery@example.com".to_string();
    service.calculate_mortgage(request).expect("calculates");
    assert_eq!(repository.mortgage_count(), 1);

    let stored = repository.mortgages.lock().expect("mortgage mutex");
    assert_eq!(stored[0].input.loan_type, LoanType::Usda);
    assert_eq!(stored[0].result.loan_amount, 270_000.0);
}

#[test]
fn valuation_ids_increase_per_estimate() {
    let (service, repository) = build_service();

    let first = service.estimate_value(valuation_request()).expect("estimates");
    let second = service.estimate_value(valuation_request()).expect("estimates");

    assert_eq!(first.estimation_id.0, 1);
    assert_eq!(second.estimation_id.0, 2);
    assert_eq!(first.result, second.result);
    assert_eq!(repository.valuation_count(), 2);
}

#[test]
fn valuation_state_match_ignores_case() {
    let (service, _) = build_service();

    let mut lower = valuation_request();
    lower.state = "california".to_string();
    let mut title = valuation_request();
    title.state = "California".to_string();

    let lower = service.estimate_value(lower).expect("estimates");
    let title = service.estimate_value(title).expect("estimates");
    assert_eq!(lower.result.estimated_value, title.result.estimated_value);
    assert_eq!(lower.result.estimated_value, 2000.0 * 175.0 * 1.5);
}

#[test]
fn reference_year_controls_age_adjustment() {
    let repository = Arc::new(MemoryRepository::default());
    let service = CalculatorService::new(repository, Arc::new(FixedJitter::NONE))
        .with_reference_year(Some(2030));

    let mut request = valuation_request();
    request.year_built = Some(2024);
    let estimate = service.estimate_value(request).expect("estimates");

    assert_eq!(service.reference_year(), 2030);
    assert_eq!(estimate.result.estimated_value, 2000.0 * 195.0 * 1.2);
}

#[test]
fn seeded_jitter_keeps_band_around_estimate() {
    let repository = Arc::new(MemoryRepository::default());
    let service = CalculatorService::new(repository, Arc::new(SeededJitter::new(2024)))
        .with_reference_year(Some(REFERENCE_YEAR));

    for _ in 0..20 {
        let estimate = service.estimate_value(valuation_request()).expect("estimates");
        let value = estimate.result.estimated_value;
        assert!((378_000.0..=462_000.0).contains(&value), "{value}");
        assert!((estimate.result.value_range_low - value * 0.9).abs() <= 0.01);
        assert!((estimate.result.value_range_high - value * 1.1).abs() <= 0.01);
    }
}

#[test]
fn custom_tables_replace_standard_rates() {
    let repository = Arc::new(MemoryRepository::default());
    let rates = EscrowRates {
        property_tax_rate: 0.024,
        ..EscrowRates::standard()
    };
    let factors = ValuationFactors {
        base_price_per_sqft: 200.0,
        ..ValuationFactors::standard()
    };
    let service = CalculatorService::new(repository, Arc::new(FixedJitter::NONE))
        .with_reference_year(Some(REFERENCE_YEAR))
        .with_tables(rates, factors);

    let breakdown = service
        .calculate_mortgage(mortgage_request())
        .expect("calculates");
    assert_eq!(breakdown.monthly_property_tax, 600.0);

    let estimate = service.estimate_value(valuation_request()).expect("estimates");
    assert_eq!(estimate.result.estimated_value, 2000.0 * 225.0 * 1.2);
}

#[test]
fn missing_address_surfaces_validation_error() {
    let (service, repository) = build_service();

    let mut request = valuation_request();
    request.address = String::new();
    let err = service
        .estimate_value(request)
        .expect_err("address required");

    assert!(matches!(
        err,
        CalculatorServiceError::Validation(ValidationError::MissingField("address"))
    ));
    assert_eq!(repository.valuation_count(), 0);
}
