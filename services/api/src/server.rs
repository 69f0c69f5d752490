use crate::cli::ServeArgs;
use crate::demo::seed_demo_data;
use crate::infra::AppState;
use crate::routes::with_pipeline_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use talent_track::config::AppConfig;
use talent_track::error::AppError;
use talent_track::pipeline::InMemoryPipelineStore;
use talent_track::telemetry;
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

    let store = Arc::new(InMemoryPipelineStore::new());
    if args.seed || config.seed_demo_data {
        let summary = seed_demo_data(&*store)?;
        info!(
            positions = summary.positions,
            candidates = summary.candidates,
            applications = summary.applications,
            "demo hiring dataset seeded"
        );
    }

    let app = with_pipeline_routes(store)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "interview pipeline service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
