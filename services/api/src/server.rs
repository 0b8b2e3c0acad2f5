use crate::cli::ServeArgs;
use crate::infra::{calculator_settings, AppState, InMemoryCalculationRepository};
use crate::routes::with_calculator_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use realty_calc::calculators::CalculatorService;
use realty_calc::config::AppConfig;
use realty_calc::error::AppError;
use realty_calc::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let (reference_year, jitter) = calculator_settings(&config.calculators);
    let repository = Arc::new(InMemoryCalculationRepository::default());
    let calculator_service = Arc::new(
        CalculatorService::new(repository, jitter).with_reference_year(reference_year),
    );

    let app = with_calculator_routes(calculator_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        reference_year = ?config.calculators.reference_year,
        seeded_jitter = config.calculators.jitter_seed.is_some(),
        "brokerage calculators ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
