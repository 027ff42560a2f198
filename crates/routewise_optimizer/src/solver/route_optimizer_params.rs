use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::{cost_model::CostModelParams, transit::SpeedParams};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RouteOptimizerParams {
    pub cost: CostModelParams,
    pub speeds: SpeedParams,

    /// Reject non-positive cargo weights instead of ignoring them.
    pub strict_cargo_validation: bool,
}

impl RouteOptimizerParams {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let params = RouteOptimizerParams::from_json(
            r#"{ "strict_cargo_validation": true, "cost": { "per_km_rate": 2.0 } }"#,
        )
        .unwrap();

        assert!(params.strict_cargo_validation);
        assert_eq!(params.cost.per_km_rate, 2.0);
        assert_eq!(params.cost.per_hour_rate, 40.0);
        assert_eq!(params.speeds, SpeedParams::default());
    }
}
