use std::fmt;

use tracing::{debug, instrument};

use crate::{
    problem::{
        cargo::CargoInfo, kilometers::Kilometers, route_constraints::RouteConstraints,
        transit::base_transit_time_hours, waypoints::Waypoints,
    },
    solver::{
        confidence::compute_confidence,
        error::RouteOptimizationError,
        objective::ObjectiveType,
        result::{BaselineMetrics, RouteOptimizationResult},
        route_optimizer_params::RouteOptimizerParams,
        segment::{RouteSegment, build_segments, total_distance},
        strategy::ObjectiveStrategy,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct RouteOptimizationRequest {
    pub waypoints: Waypoints,
    pub objective_type: ObjectiveType,
    pub constraints: Option<RouteConstraints>,
    pub cargo: Option<CargoInfo>,
}

impl RouteOptimizationRequest {
    pub fn new(waypoints: Waypoints, objective_type: ObjectiveType) -> Self {
        Self {
            waypoints,
            objective_type,
            constraints: None,
            cargo: None,
        }
    }

    pub fn with_constraints(mut self, constraints: RouteConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    pub fn with_cargo(mut self, cargo: CargoInfo) -> Self {
        self.cargo = Some(cargo);
        self
    }
}

/// States of a single optimization call. Any failure ends the call in
/// [`OptimizationStage::Failed`] with a [`RouteOptimizationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationStage {
    Start,
    DistanceComputed,
    SegmentsBuilt,
    ObjectiveApplied,
    ConfidenceAttached,
    Done,
    Failed,
}

impl OptimizationStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, OptimizationStage::Done | OptimizationStage::Failed)
    }
}

impl fmt::Display for OptimizationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptimizationStage::Start => "start",
            OptimizationStage::DistanceComputed => "distance_computed",
            OptimizationStage::SegmentsBuilt => "segments_built",
            OptimizationStage::ObjectiveApplied => "objective_applied",
            OptimizationStage::ConfidenceAttached => "confidence_attached",
            OptimizationStage::Done => "done",
            OptimizationStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Validated inputs shared by every objective of a request.
struct PreparedRoute {
    segments: Vec<RouteSegment>,
    direct_distance_km: Kilometers,
    baseline: BaselineMetrics,
}

/// Computes optimized routes. Holds only immutable parameters, so a single
/// instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    params: RouteOptimizerParams,
}

impl RouteOptimizer {
    pub fn new(params: RouteOptimizerParams) -> Self {
        Self { params }
    }

    #[instrument(skip_all, level = "debug", fields(objective = %request.objective_type))]
    pub fn optimize(
        &self,
        request: &RouteOptimizationRequest,
    ) -> Result<RouteOptimizationResult, RouteOptimizationError> {
        let prepared = self.prepare(request).inspect_err(log_failure)?;
        Ok(self.apply_objective(request, &prepared, request.objective_type))
    }

    /// Runs every objective over the same request, in [`ObjectiveType::ALL`]
    /// order. The requested objective of `request` is ignored.
    #[instrument(skip_all, level = "debug")]
    pub fn compare_objectives(
        &self,
        request: &RouteOptimizationRequest,
    ) -> Result<Vec<RouteOptimizationResult>, RouteOptimizationError> {
        let prepared = self.prepare(request).inspect_err(log_failure)?;

        Ok(ObjectiveType::ALL
            .into_iter()
            .map(|objective| self.apply_objective(request, &prepared, objective))
            .collect())
    }

    fn prepare(
        &self,
        request: &RouteOptimizationRequest,
    ) -> Result<PreparedRoute, RouteOptimizationError> {
        debug!(stage = %OptimizationStage::Start, stops = request.waypoints.stop_count());
        request.waypoints.validate()?;

        let direct_distance_km = request
            .waypoints
            .pickup
            .haversine_distance(&request.waypoints.delivery);
        debug!(
            stage = %OptimizationStage::DistanceComputed,
            direct_distance_km = direct_distance_km.value()
        );

        let segments = build_segments(&request.waypoints);
        let distance_km = total_distance(&segments);
        debug!(
            stage = %OptimizationStage::SegmentsBuilt,
            segments = segments.len(),
            route_distance_km = distance_km.value()
        );

        let vehicle_type = request
            .constraints
            .as_ref()
            .and_then(RouteConstraints::vehicle_type);
        let time_hours = base_transit_time_hours(distance_km, vehicle_type, &self.params.speeds);
        let cost = self.params.cost.base_cost(
            distance_km,
            time_hours,
            request.cargo.as_ref(),
            self.params.strict_cargo_validation,
        )?;

        Ok(PreparedRoute {
            segments,
            direct_distance_km,
            baseline: BaselineMetrics {
                distance_km,
                time_hours,
                cost,
            },
        })
    }

    fn apply_objective(
        &self,
        request: &RouteOptimizationRequest,
        prepared: &PreparedRoute,
        objective: ObjectiveType,
    ) -> RouteOptimizationResult {
        let constraints = request.constraints.as_ref();

        let outcome = ObjectiveStrategy::for_objective(objective).apply(
            &prepared.segments,
            &prepared.baseline,
            constraints,
        );
        debug!(
            stage = %OptimizationStage::ObjectiveApplied,
            %objective,
            savings_percent = outcome.savings_percent
        );

        let confidence = compute_confidence(constraints);
        debug!(stage = %OptimizationStage::ConfidenceAttached, confidence);

        let result = RouteOptimizationResult {
            objective_type: objective,
            route: outcome.route,
            estimated_cost: outcome.estimated.cost,
            estimated_time_hours: outcome.estimated.time_hours,
            estimated_fuel_liters: outcome.estimated.fuel_liters,
            estimated_carbon_kg: outcome.estimated.carbon_kg,
            savings_percent: Some(outcome.savings_percent),
            balance_score: outcome.balance_score,
            factors: outcome.factors,
            risk: outcome.risk,
            confidence,
            waypoints: request.waypoints.clone(),
            direct_distance_km: prepared.direct_distance_km,
            route_distance_km: prepared.baseline.distance_km,
            baseline: prepared.baseline,
        };
        debug!(stage = %OptimizationStage::Done);

        result
    }
}

fn log_failure(error: &RouteOptimizationError) {
    debug!(stage = %OptimizationStage::Failed, kind = ?error.kind(), %error);
}
