use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    problem::{kilometers::Kilometers, waypoints::Waypoints},
    solver::{objective::ObjectiveType, risk::RiskAssessment, segment::AnnotatedSegment},
};

/// A named contribution to the result, in the order it was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationFactor {
    pub name: String,
    pub improvement_percent: f64,
}

pub type OptimizationFactors = SmallVec<[OptimizationFactor; 3]>;

/// Unoptimised metrics an objective is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaselineMetrics {
    pub distance_km: Kilometers,
    pub time_hours: f64,
    pub cost: f64,
}

/// Metrics adjusted by an objective. Only the metrics the objective works on
/// are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedMetrics {
    pub cost: Option<f64>,
    pub time_hours: Option<f64>,
    pub fuel_liters: Option<f64>,
    pub carbon_kg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptimizationResult {
    pub objective_type: ObjectiveType,
    pub route: Vec<AnnotatedSegment>,
    pub estimated_cost: Option<f64>,
    pub estimated_time_hours: Option<f64>,
    pub estimated_fuel_liters: Option<f64>,
    pub estimated_carbon_kg: Option<f64>,
    pub savings_percent: Option<f64>,
    /// Only reported by the balanced objective, on a 0 to 10 scale.
    pub balance_score: Option<f64>,
    pub factors: OptimizationFactors,
    pub risk: RiskAssessment,
    pub confidence: f64,
    pub waypoints: Waypoints,
    pub direct_distance_km: Kilometers,
    pub route_distance_km: Kilometers,
    pub baseline: BaselineMetrics,
}

impl RouteOptimizationResult {
    pub fn estimated(&self) -> EstimatedMetrics {
        EstimatedMetrics {
            cost: self.estimated_cost,
            time_hours: self.estimated_time_hours,
            fuel_liters: self.estimated_fuel_liters,
            carbon_kg: self.estimated_carbon_kg,
        }
    }
}
