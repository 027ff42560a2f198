use comfy_table::Table;
use jiff::Timestamp;
use routewise_optimizer::solver::result::RouteOptimizationResult;
use serde::Serialize;

/// A result as handed out by the CLI, stamped with the time it was produced.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRoute<'a> {
    #[serde(flatten)]
    pub result: &'a RouteOptimizationResult,
    pub optimized_at: Timestamp,
}

impl<'a> OptimizedRoute<'a> {
    pub fn now(result: &'a RouteOptimizationResult) -> Self {
        Self {
            result,
            optimized_at: Timestamp::now(),
        }
    }
}

fn format_metric(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("-"), |value| format!("{value:.2}"))
}

pub fn results_table<'a>(results: impl IntoIterator<Item = &'a RouteOptimizationResult>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "objective",
        "distance (km)",
        "cost",
        "time (h)",
        "fuel (l)",
        "carbon (kg)",
        "savings (%)",
        "risk",
        "confidence",
    ]);

    for result in results {
        table.add_row(vec![
            result.objective_type.to_string(),
            format!("{:.1}", result.route_distance_km.value()),
            format_metric(result.estimated_cost),
            format_metric(result.estimated_time_hours),
            format_metric(result.estimated_fuel_liters),
            format_metric(result.estimated_carbon_kg),
            format_metric(result.savings_percent),
            result.risk.level.to_string(),
            format!("{:.2}", result.confidence),
        ]);
    }

    table
}
