use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::solver::error::RouteOptimizationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveType {
    Cost,
    Time,
    Fuel,
    Carbon,
    Balanced,
}

impl ObjectiveType {
    pub const ALL: [ObjectiveType; 5] = [
        ObjectiveType::Cost,
        ObjectiveType::Time,
        ObjectiveType::Fuel,
        ObjectiveType::Carbon,
        ObjectiveType::Balanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectiveType::Cost => "cost",
            ObjectiveType::Time => "time",
            ObjectiveType::Fuel => "fuel",
            ObjectiveType::Carbon => "carbon",
            ObjectiveType::Balanced => "balanced",
        }
    }
}

impl fmt::Display for ObjectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectiveType {
    type Err = RouteOptimizationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ObjectiveType::ALL
            .into_iter()
            .find(|objective| objective.as_str() == value)
            .ok_or_else(|| RouteOptimizationError::InvalidObjective(value.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_objectives() {
        for objective in ObjectiveType::ALL {
            assert_eq!(objective.as_str().parse::<ObjectiveType>(), Ok(objective));
        }
    }

    #[test]
    fn test_parse_unknown_objective() {
        for value in ["invalid_xyz", "", "Cost", " time"] {
            assert_eq!(
                value.parse::<ObjectiveType>(),
                Err(RouteOptimizationError::InvalidObjective(value.to_owned()))
            );
        }
    }
}
