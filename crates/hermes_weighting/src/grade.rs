use tracing::trace;

use crate::{
    constants::DEFAULT_GRADE_FLOOR,
    edge_direction::EdgeDirection,
    error::ConfigurationError,
    geometry::{compute_geometry_distance, elevation_endpoints},
    graph_edge::GraphEdge,
    meters::Meters,
};

/// Derives the elevation change, planar distance and percent grade of an edge.
///
/// The grade comes from the endpoints of the coarse `sampled_geometry` while the
/// distance is measured over the full resolution `geometry`. Downhill grades
/// saturate at the floor: walking down a steeper slope brings no extra benefit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeModel {
    floor: f64,
}

impl Default for GradeModel {
    fn default() -> Self {
        GradeModel {
            floor: DEFAULT_GRADE_FLOOR,
        }
    }
}

impl GradeModel {
    pub fn new(floor: f64) -> Result<Self, ConfigurationError> {
        if !floor.is_finite() || floor > 0.0 {
            return Err(ConfigurationError::InvalidGradeFloor(floor));
        }

        Ok(GradeModel { floor })
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Elevation difference between the last and first sample, negated in reverse.
    /// Missing samples yield 0.
    pub fn elevation_change<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> f64 {
        let Some((start, end)) = elevation_endpoints(edge.sampled_geometry()) else {
            trace!("Edge without usable elevation samples, assuming flat");
            return 0.0;
        };

        match direction {
            EdgeDirection::Forward => end - start,
            EdgeDirection::Backward => start - end,
        }
    }

    pub fn planar_distance<E: GraphEdge + ?Sized>(&self, edge: &E) -> Meters {
        compute_geometry_distance(edge.geometry())
    }

    /// Percent grade for an elevation change over a planar distance, clamped to the floor
    pub fn percent_grade(&self, elevation_change: f64, distance: Meters) -> f64 {
        if distance.is_zero() {
            return 0.0;
        }

        self.clamp(elevation_change / distance.value() * 100.0)
    }

    pub fn edge_percent_grade<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> f64 {
        let distance = self.planar_distance(edge);
        self.percent_grade(self.elevation_change(edge, direction), distance)
    }

    // NaN must go through untouched, f64::max would hide it
    fn clamp(&self, grade: f64) -> f64 {
        if grade < self.floor { self.floor } else { grade }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geopoint::GeoPoint, test_graph_utils::test_graph::TestEdge};

    fn edge(start_elevation: f64, end_elevation: f64) -> TestEdge {
        TestEdge::from_geometry(
            0,
            1,
            vec![
                GeoPoint::with_elevation(51.0, 0.0, start_elevation),
                GeoPoint::with_elevation(51.0, 0.001, end_elevation),
            ],
            5.0,
        )
    }

    #[test]
    fn test_elevation_change_is_antisymmetric() {
        let grade_model = GradeModel::default();
        let edge = edge(10.0, 9.0);

        let forward = grade_model.elevation_change(&edge, EdgeDirection::Forward);
        let backward = grade_model.elevation_change(&edge, EdgeDirection::Backward);

        assert_eq!(forward, -1.0);
        assert_eq!(backward, -forward);
    }

    #[test]
    fn test_grade_is_clamped_to_floor() {
        let grade_model = GradeModel::default();
        assert_eq!(grade_model.percent_grade(-12.0, Meters::new(100.0)), -8.0);
        assert_eq!(grade_model.percent_grade(-5.0, Meters::new(100.0)), -5.0);
        assert_eq!(grade_model.percent_grade(12.0, Meters::new(100.0)), 12.0);
    }

    #[test]
    fn test_custom_floor() {
        let grade_model = GradeModel::new(-10.0).unwrap();
        assert_eq!(grade_model.percent_grade(-12.0, Meters::new(100.0)), -10.0);

        assert!(GradeModel::new(1.0).is_err());
        assert!(GradeModel::new(f64::NAN).is_err());
    }

    #[test]
    fn test_zero_distance_has_zero_grade() {
        let grade_model = GradeModel::default();
        assert_eq!(grade_model.percent_grade(-7.0, Meters::ZERO), 0.0);
    }

    #[test]
    fn test_missing_elevation_is_flat() {
        let grade_model = GradeModel::default();
        let edge = TestEdge::from_geometry(
            0,
            1,
            vec![GeoPoint::new(51.0, 0.0), GeoPoint::new(51.0, 0.001)],
            5.0,
        );

        assert_eq!(grade_model.elevation_change(&edge, EdgeDirection::Forward), 0.0);
        assert_eq!(
            grade_model.edge_percent_grade(&edge, EdgeDirection::Backward),
            0.0
        );
    }

    #[test]
    fn test_grade_uses_sampled_endpoints() {
        let grade_model = GradeModel::default();
        // 1 m rise over roughly 70 m
        let edge = edge(0.0, 1.0);
        let distance = grade_model.planar_distance(&edge).value();

        let grade = grade_model.edge_percent_grade(&edge, EdgeDirection::Forward);
        assert_eq!(grade, 1.0 / distance * 100.0);
        assert_eq!(
            grade_model.edge_percent_grade(&edge, EdgeDirection::Backward),
            -1.0 / distance * 100.0
        );
    }
}
