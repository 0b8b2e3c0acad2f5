use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use realty_calc::calculators::{calculator_router, CalculationRepository, CalculatorService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_calculator_routes<R>(service: Arc<CalculatorService<R>>) -> axum::Router
where
    R: CalculationRepository + 'static,
{
    calculator_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{jitter_source, InMemoryCalculationRepository};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn router() -> (axum::Router, InMemoryCalculationRepository) {
        let repository = InMemoryCalculationRepository::default();
        let service = CalculatorService::new(Arc::new(repository.clone()), jitter_source(Some(5)))
            .with_reference_year(Some(2024));
        (with_calculator_routes(Arc::new(service)), repository)
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn mortgage_route_is_mounted_with_operational_routes() {
        let (router, repository) = router();
        let body = json!({
            "property_price": 250000,
            "down_payment": 25000,
            "interest_rate": 5.5,
            "loan_term": 15,
            "contact_name": "Riley",
            "contact_email": "riley@example.com"
        });

        let response = router
            .oneshot(
                Request::post("/mortgage/calculate/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).expect("serializes")))
                    .expect("request builds"),
            )
            .await
            .expect("route responds");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(repository.mortgages().len(), 1);
    }

    #[tokio::test]
    async fn health_route_is_mounted() {
        let (router, _) = router();
        let response = router
            .oneshot(
                Request::get("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route responds");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
