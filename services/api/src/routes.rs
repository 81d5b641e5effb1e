use crate::infra::{AppState, DashboardContext, MapAnnotation, MAP_ANNOTATIONS};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use happylens::clusters::{self, ClusterAssignment, ClusterDescription, ClusterId};
use happylens::error::AppError;
use happylens::ranking::{self, PresetWeights, RankedEntry, WeightSource, WeightVector};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_dashboard_routes(context: Arc<DashboardContext>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/v1/map", get(map_endpoint))
        .route("/api/v1/rankings", post(rankings_endpoint))
        .route("/api/v1/clusters", get(clusters_endpoint))
        .route("/api/v1/clusters/:cluster_id", get(cluster_detail_endpoint))
        .with_state(context)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
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

pub(crate) async fn dashboard_page() -> Html<&'static str> {
    Html(include_str!("dashboard.html"))
}

/// Slider state posted by the dashboard. Every control defaults to the
/// slider's starting position when omitted.
#[derive(Debug, Deserialize)]
pub(crate) struct RankingRequest {
    #[serde(default = "default_weight")]
    pub(crate) gdp: f64,
    #[serde(default = "default_weight")]
    pub(crate) social_support: f64,
    #[serde(default = "default_weight")]
    pub(crate) life_expectancy: f64,
    #[serde(default = "default_weight")]
    pub(crate) freedom: f64,
    #[serde(default = "default_weight")]
    pub(crate) generosity: f64,
    #[serde(default = "default_weight")]
    pub(crate) corruption: f64,
}

fn default_weight() -> f64 {
    ranking::DEFAULT_WEIGHT
}

impl RankingRequest {
    fn weights(&self) -> Result<WeightVector, AppError> {
        let vector = WeightVector::new([
            self.gdp,
            self.social_support,
            self.life_expectancy,
            self.freedom,
            self.generosity,
            self.corruption,
        ])?;
        Ok(vector)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RankingResponse {
    pub(crate) entries: Vec<RankedEntry>,
}

pub(crate) async fn rankings_endpoint(
    State(context): State<Arc<DashboardContext>>,
    Json(request): Json<RankingRequest>,
) -> Result<Json<RankingResponse>, AppError> {
    let mut source = PresetWeights::new(request.weights()?);
    let weights = source.collect_weights()?;

    let entries = ranking::rank(&context.records, &weights);
    Ok(Json(RankingResponse { entries }))
}

#[derive(Debug, Serialize)]
pub(crate) struct MapCountry {
    pub(crate) country: String,
    pub(crate) iso_alpha: String,
    pub(crate) cluster: ClusterId,
    pub(crate) color: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PaletteEntry {
    pub(crate) cluster: ClusterId,
    pub(crate) color: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct MapResponse {
    pub(crate) countries: Vec<MapCountry>,
    pub(crate) palette: Vec<PaletteEntry>,
    pub(crate) annotations: Vec<MapAnnotation>,
}

pub(crate) async fn map_endpoint(
    State(context): State<Arc<DashboardContext>>,
) -> Result<Json<MapResponse>, AppError> {
    let mut countries = Vec::with_capacity(context.clusters.assignments().len());
    for assignment in context.clusters.assignments() {
        countries.push(MapCountry {
            country: assignment.country.clone(),
            iso_alpha: assignment.iso_alpha.clone(),
            cluster: assignment.cluster,
            color: clusters::color_of(assignment.cluster)?,
        });
    }

    let mut palette = Vec::new();
    for id in context.clusters.observed_ids() {
        palette.push(PaletteEntry {
            cluster: id,
            color: clusters::color_of(id)?,
        });
    }

    Ok(Json(MapResponse {
        countries,
        palette,
        annotations: MAP_ANNOTATIONS.to_vec(),
    }))
}

#[derive(Debug, Serialize)]
pub(crate) struct ClustersResponse {
    pub(crate) observed: Vec<ClusterId>,
    pub(crate) descriptions: Vec<&'static ClusterDescription>,
}

pub(crate) async fn clusters_endpoint(
    State(context): State<Arc<DashboardContext>>,
) -> Result<Json<ClustersResponse>, AppError> {
    let observed = context.clusters.observed_ids();
    let mut descriptions = Vec::with_capacity(observed.len());
    for id in &observed {
        descriptions.push(clusters::describe(*id)?);
    }

    Ok(Json(ClustersResponse {
        observed,
        descriptions,
    }))
}

#[derive(Debug, Serialize)]
pub(crate) struct ClusterDetailResponse {
    pub(crate) description: &'static ClusterDescription,
    pub(crate) members: Vec<ClusterAssignment>,
}

pub(crate) async fn cluster_detail_endpoint(
    State(context): State<Arc<DashboardContext>>,
    Path(cluster_id): Path<u8>,
) -> Result<Json<ClusterDetailResponse>, AppError> {
    let id = ClusterId(cluster_id);
    let description = clusters::describe(id)?;
    let members = context
        .clusters
        .clusters_of(id)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ClusterDetailResponse {
        description,
        members,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use happylens::clusters::ClusterTable;
    use happylens::dataset;
    use std::io::Cursor;
    use tower::ServiceExt;

    const DATASET: &str = "\
Country,Year,Rank,HappinessScore,upperwhisker,lowerwhisker,GDP,SocialSupport,LifeExpectancy,Freedom,Generosity,Corruption
Finland,2024,1,7.741,7.815,7.667,1.844,1.572,0.695,0.859,0.142,0.546
Denmark,2024,2,7.583,7.665,7.500,1.908,1.520,0.699,0.823,0.204,0.548
Luxembourg,2024,8,7.122,7.209,7.035,2.141,1.355,0.708,0.801,0.146,0.432
";

    const CLUSTERS: &str = "\
Country,iso_alpha,Cluster
Finland,FIN,2
Denmark,DNK,2
Luxembourg,LUX,2
Poland,POL,0
";

    fn context() -> Arc<DashboardContext> {
        let records = dataset::from_reader(Cursor::new(DATASET), 2024).expect("dataset parses");
        let clusters = ClusterTable::from_reader(Cursor::new(CLUSTERS)).expect("clusters parse");
        Arc::new(DashboardContext {
            records: Arc::new(records),
            clusters: Arc::new(clusters),
        })
    }

    fn gdp_only_request() -> RankingRequest {
        RankingRequest {
            gdp: 1.0,
            social_support: 0.0,
            life_expectancy: 0.0,
            freedom: 0.0,
            generosity: 0.0,
            corruption: 0.0,
        }
    }

    #[tokio::test]
    async fn rankings_endpoint_returns_weighted_top_ten() {
        let Json(body) = rankings_endpoint(State(context()), Json(gdp_only_request()))
            .await
            .expect("ranking computes");

        assert!(body.entries.len() <= 10);
        assert_eq!(body.entries[0].country, "Luxembourg");
        assert_eq!(body.entries[0].score, 2.141);
    }

    #[tokio::test]
    async fn rankings_endpoint_rejects_out_of_range_weights() {
        let request = RankingRequest {
            gdp: 1.0001,
            ..gdp_only_request()
        };

        let err = rankings_endpoint(State(context()), Json(request))
            .await
            .expect_err("out-of-range weight is rejected");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn rankings_route_accepts_slider_payloads() {
        let router = with_dashboard_routes(context());

        let response = router
            .oneshot(
                axum::http::Request::post("/api/v1/rankings")
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(
                        json!({ "gdp": 1.0, "freedom": 0.25 }).to_string(),
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn map_endpoint_colors_every_assignment() {
        let Json(body) = map_endpoint(State(context()))
            .await
            .expect("map payload builds");

        assert_eq!(body.countries.len(), 4);
        assert!(body
            .countries
            .iter()
            .all(|country| country.color.starts_with('#')));
        assert_eq!(body.annotations.len(), 3);
        assert_eq!(body.palette.len(), 2);
    }

    #[tokio::test]
    async fn clusters_endpoint_describes_observed_ids() {
        let Json(body) = clusters_endpoint(State(context()))
            .await
            .expect("cluster summary builds");

        assert_eq!(body.observed, vec![ClusterId(0), ClusterId(2)]);
        assert_eq!(body.descriptions.len(), 2);
    }

    #[tokio::test]
    async fn cluster_detail_lists_members() {
        let Json(body) = cluster_detail_endpoint(State(context()), Path(2))
            .await
            .expect("detail builds");

        let members: Vec<&str> = body.members.iter().map(|m| m.country.as_str()).collect();
        assert_eq!(members, ["Finland", "Denmark", "Luxembourg"]);
    }

    #[tokio::test]
    async fn unknown_cluster_is_a_server_fault_not_a_client_error() {
        let err = cluster_detail_endpoint(State(context()), Path(9))
            .await
            .expect_err("cluster 9 has no description");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body.get("status"), Some(&json!("ok")));
    }
}
