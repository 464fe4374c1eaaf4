use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryLeadStore};
use crate::routes::with_funnel_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use loanbridge::config::AppConfig;
use loanbridge::eligibility::{EligibilityEngine, RateBook};
use loanbridge::employers::EmployerDirectory;
use loanbridge::error::AppError;
use loanbridge::funnel::LeadFunnelService;
use loanbridge::telemetry;

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

    let directory = Arc::new(EmployerDirectory::with_seed());
    let engine = Arc::new(EligibilityEngine::new(RateBook::builtin()));
    let store = Arc::new(InMemoryLeadStore::default());
    let funnel_service = Arc::new(LeadFunnelService::new(directory, engine, store));

    let app = with_funnel_routes(funnel_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "lead funnel service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
