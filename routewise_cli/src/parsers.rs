use std::path::Path;

use anyhow::Context;
use routewise_optimizer::{
    json::types::JsonRouteOptimizationRequest,
    problem::waypoints::NoWaypointSource,
    solver::{objective::ObjectiveType, route_optimizer::RouteOptimizationRequest},
};

pub fn parse_objective(input: &str) -> Result<ObjectiveType, String> {
    input
        .trim()
        .to_lowercase()
        .parse::<ObjectiveType>()
        .map_err(|error| error.to_string())
}

/// Reads a boundary request from a JSON file. Requests that only carry a
/// `requestId` cannot be resolved here and fail with missing waypoints.
pub fn read_request(path: &Path) -> Result<RouteOptimizationRequest, anyhow::Error> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request {}", path.display()))?;
    let json: JsonRouteOptimizationRequest = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse request {}", path.display()))?;

    Ok(json.build_request(&NoWaypointSource)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_objective() {
        assert_eq!(parse_objective("time"), Ok(ObjectiveType::Time));
        assert_eq!(parse_objective(" Balanced "), Ok(ObjectiveType::Balanced));
        assert!(parse_objective("invalid_xyz").is_err());
    }
}
