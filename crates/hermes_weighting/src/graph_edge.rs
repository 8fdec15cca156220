use crate::{edge_direction::EdgeDirection, geopoint::GeoPoint, meters::Meters};

/// Read-only view of a directed network edge, owned by the graph storage
pub trait GraphEdge {
    /// Stored length
    fn distance(&self) -> Meters;

    /// Full resolution polyline, from the start node to the end node
    fn geometry(&self) -> &[GeoPoint];

    /// Coarse elevation samples used to derive the grade
    fn sampled_geometry(&self) -> &[GeoPoint] {
        self.geometry()
    }

    /// Encoded speed in km/h for the direction, 0 when the direction is not accessible
    fn speed(&self, direction: EdgeDirection) -> f64;

    /// Edges the search should avoid, e.g. heading against the requested direction
    fn is_unfavored(&self) -> bool {
        false
    }
}
