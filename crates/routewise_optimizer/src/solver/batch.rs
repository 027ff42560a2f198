use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::solver::{
    error::RouteOptimizationError,
    result::RouteOptimizationResult,
    route_optimizer::{RouteOptimizationRequest, RouteOptimizer},
};

pub type BatchResult = Result<RouteOptimizationResult, RouteOptimizationError>;

impl RouteOptimizer {
    /// Optimizes independent requests in parallel. Results are returned in
    /// input order, one per request; a failing request does not affect the
    /// others.
    #[instrument(skip_all, level = "debug", fields(requests = requests.len()))]
    pub fn optimize_batch(&self, requests: &[RouteOptimizationRequest]) -> Vec<BatchResult> {
        let results = requests
            .par_iter()
            .map(|request| self.optimize(request))
            .collect::<Vec<_>>();

        debug!(
            failed = results.iter().filter(|result| result.is_err()).count(),
            "Batch optimization finished"
        );

        results
    }
}
