use std::{path::PathBuf, time::Duration};

use clap::Args;
use indicatif::ProgressBar;
use routewise_optimizer::solver::route_optimizer::RouteOptimizer;
use tracing::{info, warn};

use crate::{file_utils::read_json_files, parsers, report};

#[derive(Args)]
pub struct BatchArgs {
    /// A request file or a folder of request files
    #[arg(short = 'i', long)]
    input: PathBuf,
}

pub fn run(optimizer: &RouteOptimizer, args: BatchArgs) -> Result<(), anyhow::Error> {
    info!("Optimizing requests from {:?}", args.input);
    let paths = if args.input.is_file() {
        vec![args.input]
    } else {
        read_json_files(&args.input)?
    };

    let mut requests = Vec::with_capacity(paths.len());
    let mut request_paths = Vec::with_capacity(paths.len());
    for path in paths {
        match parsers::read_request(&path) {
            Ok(request) => {
                requests.push(request);
                request_paths.push(path);
            }
            Err(error) => warn!("Skipping {:?}: {:#}", path, error),
        }
    }

    let bar = ProgressBar::new_spinner();
    bar.enable_steady_tick(Duration::from_millis(100));
    bar.set_message(format!("optimizing {} requests...", requests.len()));

    let results = optimizer.optimize_batch(&requests);

    bar.finish_and_clear();

    let mut succeeded = Vec::with_capacity(results.len());
    for (path, result) in request_paths.iter().zip(results) {
        match result {
            Ok(result) => succeeded.push(result),
            Err(error) => warn!("Failed {:?}: {} ({:?})", path, error, error.kind()),
        }
    }

    println!("{}", report::results_table(&succeeded));
    info!(
        "Finished: optimized = {}, failed = {}",
        succeeded.len(),
        request_paths.len() - succeeded.len(),
    );

    Ok(())
}
