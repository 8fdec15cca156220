use tracing::debug;

use crate::constants::{MAX_WEIGHT, SPEED_CONV};
use crate::edge_direction::EdgeDirection;
use crate::error::{
    ComputationError, ConfigurationError, check_quantity, ensure_non_negative, ensure_positive,
};
use crate::graph_edge::GraphEdge;
use crate::meters::Meters;
use crate::weighting::{Milliseconds, Weight, Weighting, accessible_speed, encoded_speed_ms};

/// Travel time in seconds at the encoded speed of the edge
#[derive(Debug, Clone)]
pub struct FastestWeighting {
    vehicle: String,
    /// m/s
    max_speed: f64,
    heading_penalty: f64,
    heading_penalty_ms: Milliseconds,
}

impl FastestWeighting {
    pub fn new(
        vehicle: impl Into<String>,
        max_speed_kmh: f64,
        heading_penalty: f64,
    ) -> Result<Self, ConfigurationError> {
        let max_speed_kmh = ensure_positive("max_speed_kmh", max_speed_kmh)?;
        let heading_penalty = ensure_non_negative("heading_penalty", heading_penalty)?;
        let vehicle = vehicle.into();

        debug!(
            "Created fastest weighting for {} with max speed {} km/h",
            vehicle, max_speed_kmh
        );

        Ok(FastestWeighting {
            vehicle,
            max_speed: max_speed_kmh / SPEED_CONV,
            heading_penalty,
            heading_penalty_ms: (heading_penalty * 1000.0).round() as Milliseconds,
        })
    }

    pub fn speed_conv(&self) -> f64 {
        SPEED_CONV
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn heading_penalty(&self) -> f64 {
        self.heading_penalty
    }
}

impl Weighting for FastestWeighting {
    fn name(&self) -> &'static str {
        "fastest"
    }

    fn vehicle(&self) -> &str {
        &self.vehicle
    }

    /// Only a lower bound for edges whose encoded speed does not exceed the max speed
    fn min_weight(&self, distance: Meters) -> Weight {
        distance.value() / self.max_speed
    }

    fn calc_edge_weight<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> Result<Weight, ComputationError> {
        let Some(speed) = accessible_speed(edge, direction) else {
            return Ok(MAX_WEIGHT);
        };

        let mut seconds = edge.distance().value() / speed * SPEED_CONV;
        if edge.is_unfavored() {
            seconds += self.heading_penalty;
        }

        check_quantity("weight", seconds)
    }

    fn calc_edge_ms<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> Result<Milliseconds, ComputationError> {
        encoded_speed_ms(edge, direction, self.heading_penalty_ms)
    }
}
