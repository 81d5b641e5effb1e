use crate::cli::ServeArgs;
use crate::infra::{AppState, DashboardContext};
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use happylens::clusters::ClusterTable;
use happylens::config::AppConfig;
use happylens::dataset::DatasetCache;
use happylens::error::AppError;
use happylens::telemetry;
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

    // Source files are immutable for the session: both tables are loaded
    // once here and every request recomputes from the shared snapshots.
    let cache = DatasetCache::default();
    let records = cache.get_or_load(&config.data.happiness_path, config.data.reporting_year)?;
    let clusters = Arc::new(ClusterTable::load(&config.data.clusters_path)?);
    let context = Arc::new(DashboardContext { records, clusters });

    let app = with_dashboard_routes(context)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        year = config.data.reporting_year,
        "happylens dashboard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
