use std::path::PathBuf;

use clap::Args;
use routewise_optimizer::solver::route_optimizer::RouteOptimizer;

use crate::{parsers, report};

#[derive(Args)]
pub struct CompareArgs {
    /// The request file to compare objectives for
    #[arg(short = 'i', long)]
    input: PathBuf,
}

pub fn run(optimizer: &RouteOptimizer, args: CompareArgs) -> anyhow::Result<()> {
    let request = parsers::read_request(&args.input)?;
    let results = optimizer.compare_objectives(&request)?;

    println!("{}", report::results_table(&results));

    Ok(())
}
