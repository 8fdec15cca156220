pub mod approximator;
pub mod config;
pub mod constants;
pub mod edge_direction;
pub mod error;
pub mod fastest_weighting;
pub mod geometry;
pub mod geopoint;
pub mod grade;
pub mod graph_edge;
pub mod meters;
pub mod metabolic;
pub mod node_access;
pub mod weighting;

#[cfg(test)]
pub(crate) mod test_graph_utils;
