use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteConstraints {
    pub max_distance_km: Option<f64>,
    pub max_time_hours: Option<f64>,
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
    pub vehicle_type: Option<String>,
    pub hazardous: bool,
}

impl RouteConstraints {
    pub fn vehicle_type(&self) -> Option<&str> {
        self.vehicle_type.as_deref()
    }
}
