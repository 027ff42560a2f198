use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::{kilometers::Kilometers, kmh::Kmh};

pub const TRUCK_VEHICLE_TYPE: &str = "truck";

/// Vehicle classes recognised by the transit time model. Anything that is not
/// exactly `"truck"` travels at the default speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleClass {
    Truck,
    Default,
}

impl VehicleClass {
    pub fn from_vehicle_type(vehicle_type: Option<&str>) -> Self {
        match vehicle_type {
            Some(TRUCK_VEHICLE_TYPE) => VehicleClass::Truck,
            _ => VehicleClass::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SpeedParams {
    pub truck_kmh: Kmh,
    pub default_kmh: Kmh,
}

impl Default for SpeedParams {
    fn default() -> Self {
        Self {
            truck_kmh: Kmh::new(70.0),
            default_kmh: Kmh::new(90.0),
        }
    }
}

impl SpeedParams {
    pub fn speed(&self, class: VehicleClass) -> Kmh {
        match class {
            VehicleClass::Truck => self.truck_kmh,
            VehicleClass::Default => self.default_kmh,
        }
    }
}

pub fn base_transit_time_hours(
    distance: Kilometers,
    vehicle_type: Option<&str>,
    speeds: &SpeedParams,
) -> f64 {
    distance / speeds.speed(VehicleClass::from_vehicle_type(vehicle_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truck_speed() {
        let hours = base_transit_time_hours(
            Kilometers::new(140.0),
            Some("truck"),
            &SpeedParams::default(),
        );
        assert_eq!(hours, 2.0);
    }

    #[test]
    fn test_default_speed() {
        let speeds = SpeedParams::default();
        for vehicle_type in [None, Some("van"), Some("Truck"), Some("")] {
            let hours = base_transit_time_hours(Kilometers::new(180.0), vehicle_type, &speeds);
            assert_eq!(hours, 2.0, "{vehicle_type:?}");
        }
    }
}
