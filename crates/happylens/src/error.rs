use crate::clusters::ClusterError;
use crate::config::ConfigError;
use crate::dataset::DatasetError;
use crate::ranking::{InvalidWeight, WeightInputError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Dataset(DatasetError),
    Cluster(ClusterError),
    Weight(InvalidWeight),
    WeightInput(WeightInputError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Dataset(err) => write!(f, "dataset error: {}", err),
            AppError::Cluster(err) => write!(f, "cluster configuration error: {}", err),
            AppError::Weight(err) => write!(f, "invalid weight: {}", err),
            AppError::WeightInput(err) => write!(f, "weight input error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Dataset(err) => Some(err),
            AppError::Cluster(err) => Some(err),
            AppError::Weight(err) => Some(err),
            AppError::WeightInput(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Weight(_) => StatusCode::UNPROCESSABLE_ENTITY,
            // UnknownCluster is a configuration defect, not a retryable
            // client error, so it surfaces as a server fault.
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Dataset(_)
            | AppError::Cluster(_)
            | AppError::WeightInput(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<DatasetError> for AppError {
    fn from(value: DatasetError) -> Self {
        Self::Dataset(value)
    }
}

impl From<ClusterError> for AppError {
    fn from(value: ClusterError) -> Self {
        Self::Cluster(value)
    }
}

impl From<InvalidWeight> for AppError {
    fn from(value: InvalidWeight) -> Self {
        Self::Weight(value)
    }
}

impl From<WeightInputError> for AppError {
    fn from(value: WeightInputError) -> Self {
        Self::WeightInput(value)
    }
}
