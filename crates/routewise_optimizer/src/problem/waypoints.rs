use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{problem::location::GeoPoint, solver::error::RouteOptimizationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Waypoints {
    pub pickup: GeoPoint,
    pub delivery: GeoPoint,
    #[serde(default)]
    pub intermediate: Vec<GeoPoint>,
}

impl Waypoints {
    pub fn new(pickup: GeoPoint, delivery: GeoPoint) -> Self {
        Self {
            pickup,
            delivery,
            intermediate: Vec::new(),
        }
    }

    pub fn with_intermediate(mut self, intermediate: Vec<GeoPoint>) -> Self {
        self.intermediate = intermediate;
        self
    }

    /// Visiting order: pickup, intermediates in input order, delivery.
    pub fn iter(&self) -> impl Iterator<Item = &GeoPoint> {
        std::iter::once(&self.pickup)
            .chain(self.intermediate.iter())
            .chain(std::iter::once(&self.delivery))
    }

    pub fn stop_count(&self) -> usize {
        self.intermediate.len() + 2
    }

    pub fn validate(&self) -> Result<(), RouteOptimizationError> {
        self.iter().try_for_each(GeoPoint::validate)
    }
}

/// Lookup of the waypoints of a previously stored request.
///
/// The engine owns no storage: callers that persist requests implement this
/// to let a request refer to its waypoints by id.
pub trait WaypointSource {
    fn waypoints(&self, request_id: &str) -> Option<Waypoints>;
}

pub struct NoWaypointSource;

impl WaypointSource for NoWaypointSource {
    fn waypoints(&self, _request_id: &str) -> Option<Waypoints> {
        None
    }
}
