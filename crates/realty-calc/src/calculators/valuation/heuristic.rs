use tracing::debug;

use super::super::errors::{CalculationError, ComputationError};
use super::super::format::round_cents;
use super::domain::{ValuationInput, ValuationResult};
use super::jitter::JitterSource;
use super::tables::{location_multiplier, ValuationFactors};

/// Mock market estimate for a property.
///
/// `reference_year` ages the home against `year_built`. The only
/// non-deterministic step is the draw from `jitter`; the band is derived from
/// the jittered value so both sides stay symmetric around it.
pub fn estimate_value(
    input: &ValuationInput,
    factors: &ValuationFactors,
    reference_year: i32,
    jitter: &dyn JitterSource,
) -> Result<ValuationResult, CalculationError> {
    let address = input.normalized_address()?;

    let unjittered = base_estimate(input, factors, reference_year);
    let factor = jitter.factor();
    let estimated_value =
        ComputationError::ensure_finite("valuation", "estimated_value", unjittered * factor)?;

    let value_range_low = estimated_value * (1.0 - factors.range_spread);
    let value_range_high = estimated_value * (1.0 + factors.range_spread);

    debug!(
        state = %address.state,
        has_square_feet = input.supplied_square_feet().is_some(),
        jitter = factor,
        "valuation estimated"
    );

    Ok(ValuationResult {
        estimated_value: round_cents(estimated_value),
        value_range_low: round_cents(value_range_low),
        value_range_high: round_cents(value_range_high),
        full_address: address.full_address(),
    })
}

/// Estimate before jitter. Zero counts are skipped like missing ones; the
/// per-square-foot price is not clamped.
pub fn base_estimate(input: &ValuationInput, factors: &ValuationFactors, reference_year: i32) -> f64 {
    let bedroom_delta = input
        .supplied_bedrooms()
        .map(|count| f64::from(count) - f64::from(factors.bedroom_baseline));
    let bathroom_delta = input
        .supplied_bathrooms()
        .map(|count| f64::from(count) - f64::from(factors.bathroom_baseline));

    let mut price_per_sqft = factors.base_price_per_sqft;
    if let Some(delta) = bedroom_delta {
        price_per_sqft += delta * factors.per_bedroom_sqft_adjustment;
    }
    if let Some(delta) = bathroom_delta {
        price_per_sqft += delta * factors.per_bathroom_sqft_adjustment;
    }
    if let Some(year_built) = input.supplied_year_built() {
        let age = i64::from(reference_year) - i64::from(year_built);
        if age < factors.new_construction_max_age {
            price_per_sqft += factors.new_construction_premium;
        } else if age > factors.dated_min_age {
            price_per_sqft -= factors.dated_discount;
        }
    }

    let multiplier = location_multiplier(&input.state);

    match input.supplied_square_feet() {
        Some(square_feet) => f64::from(square_feet) * price_per_sqft * multiplier,
        None => {
            let mut value = factors.fallback_base_value * multiplier;
            if let Some(delta) = bedroom_delta {
                value += delta * factors.per_bedroom_value_adjustment;
            }
            if let Some(delta) = bathroom_delta {
                value += delta * factors.per_bathroom_value_adjustment;
            }
            value
        }
    }
}
