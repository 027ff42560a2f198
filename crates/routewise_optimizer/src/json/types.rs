use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    problem::{
        cargo::CargoInfo,
        route_constraints::RouteConstraints,
        waypoints::{WaypointSource, Waypoints},
    },
    solver::{
        error::RouteOptimizationError, objective::ObjectiveType,
        route_optimizer::RouteOptimizationRequest,
    },
};

/// Request as received at the system boundary. The objective stays a plain
/// string until the request is built so unknown values surface as
/// [`RouteOptimizationError::InvalidObjective`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "camelCase", rename = "RouteOptimizationRequest")]
pub struct JsonRouteOptimizationRequest {
    pub request_id: Option<String>,
    pub waypoints: Option<Waypoints>,
    pub objective_type: String,
    pub constraints: Option<RouteConstraints>,
    pub cargo: Option<CargoInfo>,
}

impl JsonRouteOptimizationRequest {
    /// Explicit waypoints win over a stored request referenced by id.
    #[instrument(skip_all, level = "debug")]
    pub fn build_request<S>(
        self,
        source: &S,
    ) -> Result<RouteOptimizationRequest, RouteOptimizationError>
    where
        S: WaypointSource,
    {
        let objective_type = self.objective_type.parse::<ObjectiveType>()?;

        let waypoints = match (self.waypoints, self.request_id.as_deref()) {
            (Some(waypoints), _) => waypoints,
            (None, Some(request_id)) => source
                .waypoints(request_id)
                .ok_or(RouteOptimizationError::MissingWaypoints)?,
            (None, None) => return Err(RouteOptimizationError::MissingWaypoints),
        };

        Ok(RouteOptimizationRequest {
            waypoints,
            objective_type,
            constraints: self.constraints,
            cargo: self.cargo,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{problem::waypoints::NoWaypointSource, test_utils};

    use super::*;

    struct SingleRequestSource;

    impl WaypointSource for SingleRequestSource {
        fn waypoints(&self, request_id: &str) -> Option<Waypoints> {
            (request_id == "req-42").then(|| test_utils::frankfurt_berlin_via(vec![]))
        }
    }

    const REQUEST: &str = r#"{
        "waypoints": {
            "pickup": { "latitude": 50.1109, "longitude": 8.6821, "address": "Frankfurt" },
            "delivery": { "latitude": 52.52, "longitude": 13.405, "address": "Berlin" }
        },
        "objectiveType": "time",
        "constraints": { "vehicleType": "truck", "avoidTolls": true },
        "cargo": { "weightKg": 2500, "isDangerous": true }
    }"#;

    #[test]
    fn test_build_request() {
        let json: JsonRouteOptimizationRequest = serde_json::from_str(REQUEST).unwrap();
        let request = json.build_request(&NoWaypointSource).unwrap();

        assert_eq!(request.objective_type, ObjectiveType::Time);
        assert!(request.waypoints.intermediate.is_empty());

        let constraints = request.constraints.unwrap();
        assert_eq!(constraints.vehicle_type(), Some("truck"));
        assert!(constraints.avoid_tolls);
        assert!(!constraints.avoid_highways);

        let cargo = request.cargo.unwrap();
        assert_eq!(cargo.weight_kg, Some(2500.0));
        assert!(cargo.is_dangerous);
        assert!(!cargo.temperature_controlled);
    }

    #[test]
    fn test_invalid_objective() {
        let mut json: JsonRouteOptimizationRequest = serde_json::from_str(REQUEST).unwrap();
        json.objective_type = String::from("invalid_xyz");

        let error = json.build_request(&NoWaypointSource).unwrap_err();
        assert_eq!(
            error,
            RouteOptimizationError::InvalidObjective(String::from("invalid_xyz"))
        );
    }

    #[test]
    fn test_missing_waypoints() {
        let json = JsonRouteOptimizationRequest {
            request_id: None,
            waypoints: None,
            objective_type: String::from("cost"),
            constraints: None,
            cargo: None,
        };

        assert_eq!(
            json.build_request(&NoWaypointSource).unwrap_err(),
            RouteOptimizationError::MissingWaypoints
        );
    }

    #[test]
    fn test_waypoints_from_source() {
        let json = JsonRouteOptimizationRequest {
            request_id: Some(String::from("req-42")),
            waypoints: None,
            objective_type: String::from("carbon"),
            constraints: None,
            cargo: None,
        };

        let request = json.clone().build_request(&SingleRequestSource).unwrap();
        assert_eq!(request.waypoints, test_utils::frankfurt_berlin_via(vec![]));

        assert_eq!(
            json.build_request(&NoWaypointSource).unwrap_err(),
            RouteOptimizationError::MissingWaypoints
        );
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = serde_json::from_str::<JsonRouteOptimizationRequest>(
            r#"{ "objectiveType": "cost", "priority": "high" }"#,
        );
        assert!(result.is_err());
    }
}
