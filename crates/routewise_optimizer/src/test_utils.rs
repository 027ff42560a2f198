use crate::{
    problem::{
        cargo::CargoInfo, location::GeoPoint, route_constraints::RouteConstraints,
        waypoints::Waypoints,
    },
    solver::{objective::ObjectiveType, route_optimizer::RouteOptimizationRequest},
};

pub fn frankfurt() -> GeoPoint {
    GeoPoint::new(50.1109, 8.6821, "Frankfurt")
}

pub fn berlin() -> GeoPoint {
    GeoPoint::new(52.5200, 13.4050, "Berlin")
}

pub fn leipzig() -> GeoPoint {
    GeoPoint::new(51.3397, 12.3731, "Leipzig")
}

pub fn kassel() -> GeoPoint {
    GeoPoint::new(51.3127, 9.4797, "Kassel")
}

/// Points spread over both hemispheres, including the antimeridian.
pub fn sample_points() -> Vec<GeoPoint> {
    vec![
        leipzig(),
        kassel(),
        GeoPoint::new(48.8566, 2.3522, "Paris"),
        GeoPoint::new(-33.8688, 151.2093, "Sydney"),
        GeoPoint::new(40.7128, -74.0060, "New York"),
        GeoPoint::new(-54.8019, -68.3030, "Ushuaia"),
        GeoPoint::new(64.8378, -147.7164, "Fairbanks"),
        GeoPoint::new(-17.7134, 178.0650, "Fiji"),
    ]
}

pub fn frankfurt_berlin_via(intermediate: Vec<GeoPoint>) -> Waypoints {
    Waypoints::new(frankfurt(), berlin()).with_intermediate(intermediate)
}

pub fn frankfurt_berlin_request(objective: ObjectiveType) -> RouteOptimizationRequest {
    RouteOptimizationRequest::new(frankfurt_berlin_via(vec![]), objective)
}

pub fn truck_constraints() -> RouteConstraints {
    RouteConstraints {
        vehicle_type: Some(String::from("truck")),
        ..RouteConstraints::default()
    }
}

pub fn heavy_dangerous_cargo() -> CargoInfo {
    CargoInfo {
        cargo_type: Some(String::from("chemicals")),
        weight_kg: Some(12_000.0),
        volume_m3: Some(30.0),
        is_dangerous: true,
        temperature_controlled: false,
    }
}
