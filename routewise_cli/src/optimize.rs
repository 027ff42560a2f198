use std::path::PathBuf;

use clap::Args;
use routewise_optimizer::solver::{objective::ObjectiveType, route_optimizer::RouteOptimizer};
use tracing::info;

use crate::{parsers, report};

#[derive(Args)]
pub struct OptimizeArgs {
    /// The request file to optimize
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Overrides the objective of the request
    #[arg(long, value_parser = parsers::parse_objective)]
    objective: Option<ObjectiveType>,

    /// Output file for the JSON result
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

pub fn run(optimizer: &RouteOptimizer, args: OptimizeArgs) -> anyhow::Result<()> {
    let mut request = parsers::read_request(&args.input)?;
    if let Some(objective) = args.objective {
        request.objective_type = objective;
    }

    let result = optimizer.optimize(&request)?;
    info!(
        "Optimized {} route: segments = {}, confidence = {:.2}",
        result.objective_type,
        result.route.len(),
        result.confidence,
    );

    println!("{}", report::results_table([&result]));

    if let Some(out) = args.out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&report::OptimizedRoute::now(&result))?;
        std::fs::write(&out, json)?;
        info!("Result written to {:?}", out);
    }

    Ok(())
}
