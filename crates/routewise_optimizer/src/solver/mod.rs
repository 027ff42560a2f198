pub mod batch;
pub mod confidence;
pub mod error;
pub mod objective;
pub mod result;
pub mod risk;
pub mod route_optimizer;
pub mod route_optimizer_params;
pub mod segment;
pub mod strategy;
