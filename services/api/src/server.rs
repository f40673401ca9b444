use crate::cli::ServeArgs;
use crate::infra::{interrupt_signal, AppState};
use crate::routes::with_siting_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use district_scout::config::AppConfig;
use district_scout::error::AppError;
use district_scout::telemetry;
use district_scout::workflows::siting::{DisplayLocale, RandomAnalysisService};
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
    if let Some(locale) = args.locale.take() {
        config.analysis.locale = DisplayLocale::from_str(&locale);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let analysis_service = Arc::new(RandomAnalysisService::from_config(&config.analysis));

    let app = with_siting_routes(analysis_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        locale = config.analysis.locale.code(),
        latency_ms = config.analysis.latency_ms,
        "district scout ready"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(interrupt_signal())
        .await?;
    info!("district scout stopped");
    Ok(())
}
