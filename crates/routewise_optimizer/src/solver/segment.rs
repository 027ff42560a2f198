use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    problem::{
        kilometers::Kilometers, location::GeoPoint, route_constraints::RouteConstraints,
        waypoints::Waypoints,
    },
    solver::objective::ObjectiveType,
};

/// One leg between two consecutive waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegment {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub distance_km: Kilometers,
}

impl RouteSegment {
    pub fn new(from: &GeoPoint, to: &GeoPoint) -> Self {
        Self {
            from: from.clone(),
            to: to.clone(),
            distance_km: from.haversine_distance(to),
        }
    }

    pub fn annotate(
        &self,
        objective: ObjectiveType,
        constraints: Option<&RouteConstraints>,
    ) -> AnnotatedSegment {
        let avoid_tolls = constraints.is_some_and(|c| c.avoid_tolls);
        let avoid_highways = constraints.is_some_and(|c| c.avoid_highways);

        AnnotatedSegment {
            from: self.from.clone(),
            to: self.to.clone(),
            distance_km: self.distance_km,
            bearing_degrees: self.from.bearing(&self.to),
            objective,
            toll_free: avoid_tolls,
            highway_route: !avoid_highways,
        }
    }
}

/// A segment as reported in a result, tagged with the objective and the
/// routing preferences it was produced under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedSegment {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub distance_km: Kilometers,
    pub bearing_degrees: f64,
    pub objective: ObjectiveType,
    pub toll_free: bool,
    pub highway_route: bool,
}

/// Walks pickup, intermediates and delivery in input order. The waypoint
/// sequence is never reordered.
pub fn build_segments(waypoints: &Waypoints) -> Vec<RouteSegment> {
    let stops = waypoints.iter().collect::<Vec<_>>();
    stops
        .windows(2)
        .map(|pair| RouteSegment::new(pair[0], pair[1]))
        .collect()
}

pub fn total_distance<'a>(segments: impl IntoIterator<Item = &'a RouteSegment>) -> Kilometers {
    segments
        .into_iter()
        .map(|segment| segment.distance_km)
        .sum()
}

#[cfg(test)]
mod tests {
    use crate::test_utils;

    use super::*;

    #[test]
    fn test_single_segment_without_intermediates() {
        let waypoints = test_utils::frankfurt_berlin_via(vec![]);
        let segments = build_segments(&waypoints);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].from, waypoints.pickup);
        assert_eq!(segments[0].to, waypoints.delivery);
        assert_eq!(
            segments[0].distance_km,
            waypoints.pickup.haversine_distance(&waypoints.delivery)
        );
    }

    #[test]
    fn test_segments_follow_input_order() {
        let waypoints =
            test_utils::frankfurt_berlin_via(vec![test_utils::kassel(), test_utils::leipzig()]);
        let segments = build_segments(&waypoints);

        let hops = segments
            .iter()
            .map(|segment| (segment.from.address.as_str(), segment.to.address.as_str()))
            .collect::<Vec<_>>();

        assert_eq!(
            hops,
            vec![
                ("Frankfurt", "Kassel"),
                ("Kassel", "Leipzig"),
                ("Leipzig", "Berlin")
            ]
        );
    }

    #[test]
    fn test_total_distance_never_below_direct_distance() {
        let points = test_utils::sample_points();
        let direct = test_utils::frankfurt().haversine_distance(&test_utils::berlin());

        for split in 0..=points.len() {
            let waypoints = test_utils::frankfurt_berlin_via(points[..split].to_vec());
            let segments = build_segments(&waypoints);

            assert_eq!(segments.len(), split + 1);
            assert!(segments.iter().all(|s| s.distance_km.value() >= 0.0));
            assert!(total_distance(&segments).value() >= direct.value() - 1e-9);
        }
    }

    #[test]
    fn test_annotate_tags() {
        let segment = RouteSegment::new(&test_utils::frankfurt(), &test_utils::berlin());

        let untagged = segment.annotate(ObjectiveType::Cost, None);
        assert!(!untagged.toll_free);
        assert!(untagged.highway_route);

        let constraints = RouteConstraints {
            avoid_tolls: true,
            avoid_highways: true,
            ..RouteConstraints::default()
        };
        let tagged = segment.annotate(ObjectiveType::Time, Some(&constraints));
        assert!(tagged.toll_free);
        assert!(!tagged.highway_route);
        assert_eq!(tagged.objective, ObjectiveType::Time);
        assert_eq!(tagged.distance_km, segment.distance_km);
    }
}
