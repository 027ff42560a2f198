pub mod cargo;
pub mod cost_model;
pub mod kilometers;
pub mod kmh;
pub mod location;
pub mod route_constraints;
pub mod transit;
pub mod waypoints;
