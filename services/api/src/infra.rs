use metrics_exporter_prometheus::PrometheusHandle;
use realty_calc::calculators::valuation::{JitterSource, SeededJitter, UniformJitter};
use realty_calc::calculators::{
    CalculationRepository, EstimationId, MortgageCalculationRecord, RepositoryError,
    ValuationRecord,
};
use realty_calc::config::CalculatorConfig;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local stand-in for the leads database.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCalculationRepository {
    mortgages: Arc<Mutex<Vec<MortgageCalculationRecord>>>,
    valuations: Arc<Mutex<Vec<ValuationRecord>>>,
}

impl CalculationRepository for InMemoryCalculationRepository {
    fn record_mortgage(&self, record: MortgageCalculationRecord) -> Result<(), RepositoryError> {
        let mut guard = self
            .mortgages
            .lock()
            .map_err(|_| RepositoryError::Unavailable("mortgage store poisoned".to_string()))?;
        guard.push(record);
        Ok(())
    }

    fn record_valuation(&self, record: ValuationRecord) -> Result<EstimationId, RepositoryError> {
        let mut guard = self
            .valuations
            .lock()
            .map_err(|_| RepositoryError::Unavailable("valuation store poisoned".to_string()))?;
        guard.push(record);
        Ok(EstimationId(guard.len() as u64))
    }
}

#[cfg(test)]
impl InMemoryCalculationRepository {
    pub(crate) fn mortgages(&self) -> Vec<MortgageCalculationRecord> {
        self.mortgages
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub(crate) fn valuations(&self) -> Vec<ValuationRecord> {
        self.valuations
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

pub(crate) fn jitter_source(seed: Option<u64>) -> Arc<dyn JitterSource> {
    match seed {
        Some(seed) => Arc::new(SeededJitter::new(seed)),
        None => Arc::new(UniformJitter),
    }
}

pub(crate) fn calculator_settings(config: &CalculatorConfig) -> (Option<i32>, Arc<dyn JitterSource>) {
    (config.reference_year, jitter_source(config.jitter_seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use realty_calc::calculators::{CalculatorService, ValuationRequest};

    #[test]
    fn repository_assigns_sequential_estimation_ids() {
        let repository = Arc::new(InMemoryCalculationRepository::default());
        let service = CalculatorService::new(repository.clone(), jitter_source(Some(11)));
        let request: ValuationRequest = serde_json::from_value(serde_json::json!({
            "address": "3 Pine Ct",
            "city": "Tampa",
            "state": "Florida",
            "zip_code": "33602"
        }))
        .expect("valid request");

        let first = service.estimate_value(request.clone()).expect("estimates");
        let second = service.estimate_value(request).expect("estimates");

        assert_eq!(first.estimation_id, EstimationId(1));
        assert_eq!(second.estimation_id, EstimationId(2));
        assert_eq!(repository.valuations().len(), 2);
        assert!(repository.mortgages().is_empty());
    }

    #[test]
    fn seeded_configuration_repeats_jitter() {
        let config = CalculatorConfig {
            reference_year: Some(2024),
            jitter_seed: Some(99),
        };
        let (year, first) = calculator_settings(&config);
        let (_, second) = calculator_settings(&config);

        assert_eq!(year, Some(2024));
        assert_eq!(first.factor(), second.factor());
    }
}
