use serde::{Deserialize, Serialize};

/// States sharing a location multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationTier {
    pub multiplier: f64,
    pub states: &'static [&'static str],
}

/// Checked in order; state names are stored lowercase.
pub const LOCATION_TIERS: [LocationTier; 3] = [
    LocationTier {
        multiplier: 1.5,
        states: &["california", "new york", "massachusetts"],
    },
    LocationTier {
        multiplier: 1.2,
        states: &["texas", "florida", "georgia"],
    },
    LocationTier {
        multiplier: 0.8,
        states: &["ohio", "michigan", "indiana"],
    },
];

pub const DEFAULT_LOCATION_MULTIPLIER: f64 = 1.0;

pub fn location_multiplier(state: &str) -> f64 {
    let state = state.trim().to_lowercase();
    LOCATION_TIERS
        .iter()
        .find(|tier| tier.states.contains(&state.as_str()))
        .map(|tier| tier.multiplier)
        .unwrap_or(DEFAULT_LOCATION_MULTIPLIER)
}

/// Per-factor adjustments applied by the valuation heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationFactors {
    pub base_price_per_sqft: f64,
    pub bedroom_baseline: u32,
    pub per_bedroom_sqft_adjustment: f64,
    pub bathroom_baseline: u32,
    pub per_bathroom_sqft_adjustment: f64,
    /// Homes younger than this many years earn the new-construction premium.
    pub new_construction_max_age: i64,
    pub new_construction_premium: f64,
    /// Homes older than this many years take the dated-stock discount.
    pub dated_min_age: i64,
    pub dated_discount: f64,
    /// Starting value when square footage is unknown, before the location multiplier.
    pub fallback_base_value: f64,
    pub per_bedroom_value_adjustment: f64,
    pub per_bathroom_value_adjustment: f64,
    /// Half-width of the reported band as a share of the estimate.
    pub range_spread: f64,
}

impl ValuationFactors {
    pub const fn standard() -> Self {
        Self {
            base_price_per_sqft: 150.0,
            bedroom_baseline: 2,
            per_bedroom_sqft_adjustment: 10.0,
            bathroom_baseline: 1,
            per_bathroom_sqft_adjustment: 15.0,
            new_construction_max_age: 10,
            new_construction_premium: 20.0,
            dated_min_age: 50,
            dated_discount: 30.0,
            fallback_base_value: 250_000.0,
            per_bedroom_value_adjustment: 25_000.0,
            per_bathroom_value_adjustment: 15_000.0,
            range_spread: 0.1,
        }
    }
}

impl Default for ValuationFactors {
    fn default() -> Self {
        Self::standard()
    }
}
