use crate::{
    problem::{kilometers::Kilometers, route_constraints::RouteConstraints},
    solver::{
        objective::ObjectiveType,
        result::{BaselineMetrics, EstimatedMetrics, OptimizationFactor, OptimizationFactors},
        risk::{RiskAssessment, RiskLevel},
        segment::{AnnotatedSegment, RouteSegment},
    },
};

/// A per-kilometre metric: `distance * per_km * ratio`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerKmEstimate {
    pub per_km: f64,
    pub ratio: f64,
}

impl PerKmEstimate {
    pub fn estimate(&self, distance: Kilometers) -> f64 {
        distance.value() * self.per_km * self.ratio
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorSpec {
    pub name: &'static str,
    pub improvement_percent: f64,
}

/// Fixed improvement ratios of one objective.
///
/// The ratios are data: swapping the table for the output of a real
/// multi-objective solver does not change the shape of [`ObjectiveOutcome`].
/// Constraints never change the ratios, they only tag the segments.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveStrategy {
    pub objective: ObjectiveType,
    pub cost_ratio: Option<f64>,
    pub time_ratio: Option<f64>,
    pub fuel: Option<PerKmEstimate>,
    pub carbon: Option<PerKmEstimate>,
    pub factors: [FactorSpec; 3],
    pub balance_score: Option<f64>,
    pub risk_level: RiskLevel,
    pub risk_factors: &'static [&'static str],
}

/// Baseline consumption of 8 L/100 km.
const FUEL_LITERS_PER_KM: f64 = 0.08;

/// Baseline emissions of 150 g CO2/km.
const CARBON_KG_PER_KM: f64 = 0.15;

const fn factor(name: &'static str, improvement_percent: f64) -> FactorSpec {
    FactorSpec {
        name,
        improvement_percent,
    }
}

pub const COST_STRATEGY: ObjectiveStrategy = ObjectiveStrategy {
    objective: ObjectiveType::Cost,
    cost_ratio: Some(0.85),
    time_ratio: None,
    fuel: None,
    carbon: None,
    factors: [
        factor("Route efficiency", 8.0),
        factor("Fuel optimization", 5.0),
        factor("Toll avoidance", 2.0),
    ],
    balance_score: None,
    risk_level: RiskLevel::Low,
    risk_factors: &["Toll and fuel prices may vary"],
};

pub const TIME_STRATEGY: ObjectiveStrategy = ObjectiveStrategy {
    objective: ObjectiveType::Time,
    cost_ratio: None,
    time_ratio: Some(0.80),
    fuel: None,
    carbon: None,
    factors: [
        factor("Traffic avoidance", 12.0),
        factor("Highway usage", 6.0),
        factor("Route efficiency", 2.0),
    ],
    balance_score: None,
    risk_level: RiskLevel::Low,
    risk_factors: &["Traffic conditions may vary"],
};

pub const FUEL_STRATEGY: ObjectiveStrategy = ObjectiveStrategy {
    objective: ObjectiveType::Fuel,
    cost_ratio: None,
    time_ratio: None,
    fuel: Some(PerKmEstimate {
        per_km: FUEL_LITERS_PER_KM,
        ratio: 0.88,
    }),
    carbon: None,
    factors: [
        factor("Elevation optimization", 7.0),
        factor("Speed optimization", 3.0),
        factor("Route optimization", 2.0),
    ],
    balance_score: None,
    risk_level: RiskLevel::Low,
    risk_factors: &["Consumption depends on load and driving style"],
};

pub const CARBON_STRATEGY: ObjectiveStrategy = ObjectiveStrategy {
    objective: ObjectiveType::Carbon,
    cost_ratio: None,
    time_ratio: None,
    fuel: None,
    carbon: Some(PerKmEstimate {
        per_km: CARBON_KG_PER_KM,
        ratio: 0.82,
    }),
    factors: [
        factor("Eco-route selection", 10.0),
        factor("Efficient driving", 5.0),
        factor("Route optimization", 3.0),
    ],
    balance_score: None,
    risk_level: RiskLevel::Low,
    risk_factors: &["Emission factor based on fleet average"],
};

pub const BALANCED_STRATEGY: ObjectiveStrategy = ObjectiveStrategy {
    objective: ObjectiveType::Balanced,
    cost_ratio: Some(0.92),
    time_ratio: Some(0.95),
    fuel: Some(PerKmEstimate {
        per_km: 0.07,
        ratio: 1.0,
    }),
    carbon: None,
    factors: [
        factor("Cost reduction", 8.0),
        factor("Time savings", 5.0),
        factor("Fuel efficiency", 7.0),
    ],
    balance_score: Some(8.5),
    risk_level: RiskLevel::Low,
    risk_factors: &["Trade-offs between cost, time and fuel"],
};

/// The strategy table, in [`ObjectiveType::ALL`] order.
pub const STRATEGIES: [&ObjectiveStrategy; 5] = [
    &COST_STRATEGY,
    &TIME_STRATEGY,
    &FUEL_STRATEGY,
    &CARBON_STRATEGY,
    &BALANCED_STRATEGY,
];

/// What an objective produces before confidence is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveOutcome {
    pub route: Vec<AnnotatedSegment>,
    pub estimated: EstimatedMetrics,
    pub savings_percent: f64,
    pub balance_score: Option<f64>,
    pub factors: OptimizationFactors,
    pub risk: RiskAssessment,
}

impl ObjectiveStrategy {
    pub fn for_objective(objective: ObjectiveType) -> &'static ObjectiveStrategy {
        match objective {
            ObjectiveType::Cost => &COST_STRATEGY,
            ObjectiveType::Time => &TIME_STRATEGY,
            ObjectiveType::Fuel => &FUEL_STRATEGY,
            ObjectiveType::Carbon => &CARBON_STRATEGY,
            ObjectiveType::Balanced => &BALANCED_STRATEGY,
        }
    }

    /// Sum of the factor improvements.
    pub fn savings_percent(&self) -> f64 {
        self.factors
            .iter()
            .map(|factor| factor.improvement_percent)
            .sum()
    }

    pub fn apply(
        &self,
        segments: &[RouteSegment],
        baseline: &BaselineMetrics,
        constraints: Option<&RouteConstraints>,
    ) -> ObjectiveOutcome {
        let route = segments
            .iter()
            .map(|segment| segment.annotate(self.objective, constraints))
            .collect();

        let estimated = EstimatedMetrics {
            cost: self.cost_ratio.map(|ratio| baseline.cost * ratio),
            time_hours: self.time_ratio.map(|ratio| baseline.time_hours * ratio),
            fuel_liters: self.fuel.map(|fuel| fuel.estimate(baseline.distance_km)),
            carbon_kg: self
                .carbon
                .map(|carbon| carbon.estimate(baseline.distance_km)),
        };

        let factors = self
            .factors
            .iter()
            .map(|factor| OptimizationFactor {
                name: factor.name.to_owned(),
                improvement_percent: factor.improvement_percent,
            })
            .collect();

        ObjectiveOutcome {
            route,
            estimated,
            savings_percent: self.savings_percent(),
            balance_score: self.balance_score,
            factors,
            risk: RiskAssessment::new(self.risk_level, self.risk_factors),
        }
    }
}
