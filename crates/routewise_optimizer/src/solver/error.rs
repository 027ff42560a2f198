use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteOptimizationError {
    #[error("Invalid optimization objective: {0:?}")]
    InvalidObjective(String),

    #[error("No waypoints supplied and none found for the request")]
    MissingWaypoints,

    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidGeoPoint { latitude: f64, longitude: f64 },

    #[error("Cargo weight must be positive, got {weight_kg}")]
    DegenerateCargo { weight_kg: f64 },
}

/// Stable error codes for request handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ErrorKind {
    InvalidObjective,
    MissingWaypoints,
    InvalidGeoPoint,
    DegenerateCargo,
}

impl ErrorKind {
    /// Whether the failure is caused by the request itself. Every engine
    /// error is: the computation is deterministic, so the caller has to fix
    /// the input before calling again.
    pub fn is_client_error(&self) -> bool {
        match self {
            ErrorKind::InvalidObjective
            | ErrorKind::MissingWaypoints
            | ErrorKind::InvalidGeoPoint
            | ErrorKind::DegenerateCargo => true,
        }
    }
}

impl RouteOptimizationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RouteOptimizationError::InvalidObjective(_) => ErrorKind::InvalidObjective,
            RouteOptimizationError::MissingWaypoints => ErrorKind::MissingWaypoints,
            RouteOptimizationError::InvalidGeoPoint { .. } => ErrorKind::InvalidGeoPoint,
            RouteOptimizationError::DegenerateCargo { .. } => ErrorKind::DegenerateCargo,
        }
    }
}
