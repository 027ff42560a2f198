use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    problem::{cargo::CargoInfo, kilometers::Kilometers},
    solver::error::RouteOptimizationError,
};

/// Rates of the baseline cost model. The result is a scalar in whatever
/// currency the rates are expressed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CostModelParams {
    pub per_km_rate: f64,
    pub per_hour_rate: f64,
    pub hazardous_multiplier: f64,
    pub temperature_controlled_multiplier: f64,
    pub weight_reference_kg: f64,
}

impl Default for CostModelParams {
    fn default() -> Self {
        Self {
            per_km_rate: 1.5,
            per_hour_rate: 40.0,
            hazardous_multiplier: 1.3,
            temperature_controlled_multiplier: 1.2,
            weight_reference_kg: 1000.0,
        }
    }
}

impl CostModelParams {
    /// `sqrt(weight / reference)`, or 1.0 without a usable weight.
    ///
    /// With `strict` set a non-positive weight is an error instead of being
    /// treated as absent.
    pub fn weight_multiplier(
        &self,
        cargo: Option<&CargoInfo>,
        strict: bool,
    ) -> Result<f64, RouteOptimizationError> {
        let Some(cargo) = cargo else {
            return Ok(1.0);
        };

        match cargo.usable_weight_kg() {
            Ok(Some(weight_kg)) => Ok((weight_kg / self.weight_reference_kg).sqrt()),
            Ok(None) => Ok(1.0),
            Err(weight_kg) if strict => Err(RouteOptimizationError::DegenerateCargo { weight_kg }),
            Err(weight_kg) => {
                warn!(weight_kg, "Ignoring non-positive cargo weight in cost model");
                Ok(1.0)
            }
        }
    }

    pub fn base_cost(
        &self,
        distance: Kilometers,
        time_hours: f64,
        cargo: Option<&CargoInfo>,
        strict: bool,
    ) -> Result<f64, RouteOptimizationError> {
        let weight_multiplier = self.weight_multiplier(cargo, strict)?;
        let hazard_multiplier = match cargo {
            Some(cargo) if cargo.is_dangerous => self.hazardous_multiplier,
            _ => 1.0,
        };
        let temperature_multiplier = match cargo {
            Some(cargo) if cargo.temperature_controlled => self.temperature_controlled_multiplier,
            _ => 1.0,
        };

        let transport = distance * self.per_km_rate + time_hours * self.per_hour_rate;

        Ok(transport * weight_multiplier * hazard_multiplier * temperature_multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cargo(weight_kg: Option<f64>, is_dangerous: bool, temperature_controlled: bool) -> CargoInfo {
        CargoInfo {
            weight_kg,
            is_dangerous,
            temperature_controlled,
            ..CargoInfo::default()
        }
    }

    #[test]
    fn test_base_cost_without_cargo() {
        let params = CostModelParams::default();
        let cost = params
            .base_cost(Kilometers::new(100.0), 2.0, None, false)
            .unwrap();

        assert_eq!(cost, 100.0 * 1.5 + 2.0 * 40.0);
    }

    #[test]
    fn test_base_cost_with_all_multipliers() {
        let params = CostModelParams::default();
        let cargo = cargo(Some(4000.0), true, true);
        let cost = params
            .base_cost(Kilometers::new(100.0), 2.0, Some(&cargo), false)
            .unwrap();

        let expected = 230.0 * 2.0 * 1.3 * 1.2;
        assert!((cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_each_multiplier_alone() {
        let params = CostModelParams::default();
        let base = 100.0 * 1.5 + 2.0 * 40.0;
        let cases = [
            (cargo(None, true, false), 1.3),
            (cargo(None, false, true), 1.2),
            (cargo(Some(250.0), false, false), 0.5),
        ];

        for (cargo, multiplier) in cases {
            let cost = params
                .base_cost(Kilometers::new(100.0), 2.0, Some(&cargo), false)
                .unwrap();
            assert!((cost - base * multiplier).abs() < 1e-9, "{cargo:?}");
        }
    }

    #[test]
    fn test_non_positive_weight_falls_back_to_one() {
        let params = CostModelParams::default();
        for weight in [0.0, -250.0, f64::NAN] {
            let cargo = cargo(Some(weight), false, false);
            let cost = params
                .base_cost(Kilometers::new(10.0), 1.0, Some(&cargo), false)
                .unwrap();
            assert_eq!(cost, 55.0);
        }
    }

    #[test]
    fn test_non_positive_weight_is_an_error_when_strict() {
        let params = CostModelParams::default();
        let cargo = cargo(Some(0.0), false, false);
        let error = params
            .base_cost(Kilometers::new(10.0), 1.0, Some(&cargo), true)
            .unwrap_err();

        assert!(matches!(
            error,
            RouteOptimizationError::DegenerateCargo { weight_kg } if weight_kg == 0.0
        ));
    }
}
