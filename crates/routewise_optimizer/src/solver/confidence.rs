use crate::problem::route_constraints::RouteConstraints;

pub const BASE_CONFIDENCE: f64 = 0.85;
pub const MIN_CONFIDENCE: f64 = 0.60;
pub const MAX_CONFIDENCE: f64 = 0.95;

const AVOID_TOLLS_PENALTY: f64 = 0.05;
const AVOID_HIGHWAYS_PENALTY: f64 = 0.08;
const HAZARDOUS_PENALTY: f64 = 0.03;
const MAX_DISTANCE_BONUS: f64 = 0.05;
const MAX_TIME_BONUS: f64 = 0.05;

/// Confidence in the fixed-ratio estimate given the active constraints.
///
/// Adjustments are additive. The clamp to
/// [`MIN_CONFIDENCE`]..=[`MAX_CONFIDENCE`] is applied once, after all of them.
pub fn compute_confidence(constraints: Option<&RouteConstraints>) -> f64 {
    let Some(constraints) = constraints else {
        return BASE_CONFIDENCE;
    };

    let mut confidence = BASE_CONFIDENCE;

    if constraints.avoid_tolls {
        confidence -= AVOID_TOLLS_PENALTY;
    }
    if constraints.avoid_highways {
        confidence -= AVOID_HIGHWAYS_PENALTY;
    }
    if constraints.hazardous {
        confidence -= HAZARDOUS_PENALTY;
    }
    if constraints.max_distance_km.is_some() {
        confidence += MAX_DISTANCE_BONUS;
    }
    if constraints.max_time_hours.is_some() {
        confidence += MAX_TIME_BONUS;
    }

    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
