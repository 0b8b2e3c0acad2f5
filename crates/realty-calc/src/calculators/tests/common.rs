use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::calculators::repository::{
    CalculationRepository, EstimationId, MortgageCalculationRecord, RepositoryError,
    ValuationRecord,
};
use crate::calculators::valuation::FixedJitter;
use crate::calculators::{calculator_router, CalculatorService};

pub(super) const REFERENCE_YEAR: i32 = 2024;

#[derive(Default)]
pub(super) struct MemoryRepository {
    pub(super) mortgages: Mutex<Vec<MortgageCalculationRecord>>,
    pub(super) valuations: Mutex<Vec<ValuationRecord>>,
}

impl CalculationRepository for MemoryRepository {
    fn record_mortgage(&self, record: MortgageCalculationRecord) -> Result<(), RepositoryError> {
        self.mortgages.lock().expect("mortgage mutex").push(record);
        Ok(())
    }

    fn record_valuation(&self, record: ValuationRecord) -> Result<EstimationId, RepositoryError> {
        let mut guard = self.valuations.lock().expect("valuation mutex");
        guard.push(record);
        Ok(EstimationId(guard.len() as u64))
    }
}

impl MemoryRepository {
    pub(super) fn mortgage_count(&self) -> usize {
        self.mortgages.lock().expect("mortgage mutex").len()
    }

    pub(super) fn valuation_count(&self) -> usize {
        self.valuations.lock().expect("valuation mutex").len()
    }
}

pub(super) struct UnavailableRepository;

impl CalculationRepository for UnavailableRepository {
    fn record_mortgage(&self, _record: MortgageCalculationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn record_valuation(&self, _record: ValuationRecord) -> Result<EstimationId, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<CalculatorService<MemoryRepository>>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = CalculatorService::new(repository.clone(), Arc::new(FixedJitter::NONE))
        .with_reference_year(Some(REFERENCE_YEAR));
    (Arc::new(service), repository)
}

pub(super) fn router_with_service<R>(service: Arc<CalculatorService<R>>) -> axum::Router
where
    R: CalculationRepository + 'static,
{
    calculator_router(service)
}

pub(super) fn texas_valuation_body() -> Value {
    serde_json::json!({
        "address": "500 Congress Ave",
        "city": "Austin",
        "state": "Texas",
        "zip_code": "78701",
        "bedrooms": 3,
        "bathrooms": 2,
        "square_feet": 2000
    })
}

pub(super) async fn response_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    let body = serde_json::from_slice(&bytes).expect("json body");
    (status, body)
}
