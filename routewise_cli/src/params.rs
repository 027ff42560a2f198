use std::path::Path;

use routewise_optimizer::solver::{
    route_optimizer::RouteOptimizer, route_optimizer_params::RouteOptimizerParams,
};
use tracing::info;

pub fn create_optimizer(params_path: Option<&Path>) -> Result<RouteOptimizer, anyhow::Error> {
    let params = match params_path {
        Some(path) => {
            info!("Loading optimizer parameters from {:?}", path);
            RouteOptimizerParams::from_json(&std::fs::read_to_string(path)?)?
        }
        None => RouteOptimizerParams::default(),
    };

    Ok(RouteOptimizer::new(params))
}
