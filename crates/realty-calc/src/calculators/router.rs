use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{post, MethodRouter},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};

use super::errors::ValidationError;
use super::repository::CalculationRepository;
use super::requests::{MortgageRequest, ValuationRequest};
use super::service::{CalculatorService, CalculatorServiceError};

pub const MORTGAGE_PATHS: [&str; 2] = ["/mortgage/calculate/", "/api/v1/mortgage/calculate"];
pub const VALUATION_PATHS: [&str; 2] = [
    "/property-value/estimate/",
    "/api/v1/property-value/estimate",
];

const INVALID_DATA: &str = "Invalid data provided";
const INCOMPLETE_ADDRESS: &str = "Please provide complete address information";
const CALCULATION_FAILED: &str = "An error occurred during calculation";
const ESTIMATION_FAILED: &str = "An error occurred during estimation";
const POST_ONLY: &str = "Only POST requests are allowed";

/// Router builder exposing the mortgage calculator and home-value estimator.
pub fn calculator_router<R>(service: Arc<CalculatorService<R>>) -> Router
where
    R: CalculationRepository + 'static,
{
    let mut router = Router::new();
    for path in MORTGAGE_PATHS {
        router = router.route(path, post_only(post(mortgage_handler::<R>)));
    }
    for path in VALUATION_PATHS {
        router = router.route(path, post_only(post(valuation_handler::<R>)));
    }
    router.with_state(service)
}

fn post_only<S>(route: MethodRouter<S>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.fallback(method_not_allowed)
}

pub(crate) async fn method_not_allowed() -> Response {
    failure(StatusCode::METHOD_NOT_ALLOWED, POST_ONLY)
}

pub(crate) async fn mortgage_handler<R>(
    State(service): State<Arc<CalculatorService<R>>>,
    body: Bytes,
) -> Response
where
    R: CalculationRepository + 'static,
{
    let outcome = MortgageRequest::from_json(&body)
        .map_err(CalculatorServiceError::from)
        .and_then(|request| service.calculate_mortgage(request));

    match outcome {
        Ok(breakdown) => success(breakdown),
        Err(CalculatorServiceError::Validation(err)) => {
            warn!(error = %err, "mortgage request rejected");
            failure(StatusCode::BAD_REQUEST, INVALID_DATA)
        }
        Err(err) => {
            error!(error = %err, "mortgage calculation failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, CALCULATION_FAILED)
        }
    }
}

pub(crate) async fn valuation_handler<R>(
    State(service): State<Arc<CalculatorService<R>>>,
    body: Bytes,
) -> Response
where
    R: CalculationRepository + 'static,
{
    let outcome = ValuationRequest::from_json(&body)
        .map_err(CalculatorServiceError::from)
        .and_then(|request| service.estimate_value(request));

    match outcome {
        Ok(estimate) => success(estimate),
        Err(CalculatorServiceError::Validation(err @ ValidationError::MissingField(_))) => {
            warn!(error = %err, "valuation request missing address");
            failure(StatusCode::BAD_REQUEST, INCOMPLETE_ADDRESS)
        }
        Err(CalculatorServiceError::Validation(err)) => {
            warn!(error = %err, "valuation request rejected");
            failure(StatusCode::BAD_REQUEST, INVALID_DATA)
        }
        Err(err) => {
            error!(error = %err, "home value estimation failed");
            failure(StatusCode::INTERNAL_SERVER_ERROR, ESTIMATION_FAILED)
        }
    }
}

fn success<T: Serialize>(results: T) -> Response {
    let payload = json!({
        "success": true,
        "results": results,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

fn failure(status: StatusCode, message: &str) -> Response {
    let payload = json!({
        "success": false,
        "error": message,
    });
    (status, Json(payload)).into_response()
}
