use happylens::clusters::ClusterTable;
use happylens::dataset::CountryRecord;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Immutable session data shared by every dashboard request.
///
/// Loaded once at startup; request handlers recompute their responses from
/// these snapshots and never mutate them.
pub(crate) struct DashboardContext {
    pub(crate) records: Arc<Vec<CountryRecord>>,
    pub(crate) clusters: Arc<ClusterTable>,
}

/// Fixed text label pinned to the choropleth at hardcoded coordinates.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MapAnnotation {
    pub(crate) lon: f64,
    pub(crate) lat: f64,
    pub(crate) text: &'static str,
    pub(crate) font_size: u8,
    pub(crate) color: &'static str,
}

pub(crate) const MAP_ANNOTATIONS: [MapAnnotation; 3] = [
    MapAnnotation {
        lon: 105.0,
        lat: 57.5,
        text: "Ukrainian Ocean",
        font_size: 10,
        color: "black",
    },
    MapAnnotation {
        lon: 37.6176,
        lat: 55.7558,
        text: "Kharkiv lagoon",
        font_size: 6,
        color: "black",
    },
    MapAnnotation {
        lon: 34.0,
        lat: 44.9,
        text: "Crimea is Ukraine🇺🇦",
        font_size: 2,
        color: "darkblue",
    },
];
