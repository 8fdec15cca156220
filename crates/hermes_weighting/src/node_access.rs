use crate::geopoint::GeoPoint;

pub type NodeId = usize;

pub trait NodeAccess {
    /// Coordinates and elevation of the node
    fn node_geometry(&self, node: NodeId) -> GeoPoint;
}
