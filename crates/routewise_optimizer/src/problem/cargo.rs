use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CargoInfo {
    pub cargo_type: Option<String>,
    pub weight_kg: Option<f64>,
    pub volume_m3: Option<f64>,
    pub is_dangerous: bool,
    pub temperature_controlled: bool,
}

impl CargoInfo {
    /// The weight if it can be used by the cost model, `None` when absent.
    /// Non-positive and non-finite weights are reported as `Err` with the
    /// offending value.
    pub fn usable_weight_kg(&self) -> Result<Option<f64>, f64> {
        match self.weight_kg {
            None => Ok(None),
            Some(weight) if weight.is_finite() && weight > 0.0 => Ok(Some(weight)),
            Some(weight) => Err(weight),
        }
    }
}
