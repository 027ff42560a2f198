use geo::{Bearing, Distance, Haversine, HaversineMeasure};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{problem::kilometers::Kilometers, solver::error::RouteOptimizationError};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic waypoint supplied by the caller.
///
/// Coordinates are in decimal degrees. Ranges are not enforced on
/// construction; call [`GeoPoint::validate`] before feeding a point to the
/// engine, otherwise out-of-range values yield a well-defined but
/// meaningless distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address: String,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64, address: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            address: address.into(),
        }
    }

    pub fn from_lat_lon(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, String::new())
    }

    pub fn validate(&self) -> Result<(), RouteOptimizationError> {
        let valid_lat = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let valid_lon = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);

        if valid_lat && valid_lon {
            Ok(())
        } else {
            Err(RouteOptimizationError::InvalidGeoPoint {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Great-circle distance on a sphere of radius [`EARTH_RADIUS_KM`].
    pub fn haversine_distance(&self, to: &GeoPoint) -> Kilometers {
        let sphere = HaversineMeasure::new(EARTH_RADIUS_KM * 1000.0);
        let meters = sphere.distance(geo::Point::from(self), geo::Point::from(to));

        Kilometers::new(meters / 1000.0)
    }

    /// Initial bearing in degrees, clockwise from north.
    pub fn bearing(&self, dest: &GeoPoint) -> f64 {
        let haversine = Haversine;
        haversine.bearing(geo::Point::from(self), geo::Point::from(dest))
    }
}

impl From<&GeoPoint> for geo::Point<f64> {
    fn from(point: &GeoPoint) -> Self {
        geo::Point::new(point.longitude, point.latitude)
    }
}
