use serde::Deserialize;

use crate::constants::{MAX_DURATION, MAX_WEIGHT, SPEED_CONV};
use crate::edge_direction::EdgeDirection;
use crate::error::{ComputationError, check_quantity};
use crate::graph_edge::GraphEdge;
use crate::meters::Meters;

/// Cost of traversing an edge, in the unit of the weighting (seconds, kcal)
pub type Weight = f64;
pub type Milliseconds = u64;

/// Requested weighting, as carried by a routing request
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WeightingHints {
    pub weighting: String,
    pub vehicle: String,
}

impl WeightingHints {
    pub fn new(weighting: impl Into<String>, vehicle: impl Into<String>) -> Self {
        WeightingHints {
            weighting: weighting.into(),
            vehicle: vehicle.into(),
        }
    }
}

/// Capability of energy based weightings: estimating the energy needed to reach
/// the goal from the beeline distance and elevation difference alone.
pub trait GoalEnergyEstimator {
    fn estimate_energy_to_goal(
        &self,
        distance: Meters,
        elevation_change: Option<f64>,
    ) -> Result<Weight, ComputationError>;
}

pub trait Weighting {
    fn name(&self) -> &'static str;

    fn vehicle(&self) -> &str;

    fn descriptor(&self) -> String {
        format!("{}|{}", self.name(), self.vehicle())
    }

    fn matches(&self, hints: &WeightingHints) -> bool {
        hints.weighting.eq_ignore_ascii_case(self.name())
            && hints.vehicle.eq_ignore_ascii_case(self.vehicle())
    }

    /// Lower bound of the weight of any edge of that length
    fn min_weight(&self, distance: Meters) -> Weight;

    /// `MAX_WEIGHT` when the edge cannot be traversed in `direction`
    fn calc_edge_weight<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> Result<Weight, ComputationError>;

    /// `MAX_DURATION` when the edge cannot be traversed in `direction`
    fn calc_edge_ms<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> Result<Milliseconds, ComputationError>;

    /// Errors computing either direction are returned, not read as inaccessible
    fn can_access_edge<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
    ) -> Result<bool, ComputationError> {
        let forward = self.calc_edge_weight(edge, EdgeDirection::Forward)?;
        if forward != MAX_WEIGHT {
            return Ok(true);
        }

        let backward = self.calc_edge_weight(edge, EdgeDirection::Backward)?;
        Ok(backward != MAX_WEIGHT)
    }

    fn goal_energy_estimator(&self) -> Option<&dyn GoalEnergyEstimator> {
        None
    }
}

/// Encoded speed in km/h, `None` when the direction is not accessible
pub(crate) fn accessible_speed<E: GraphEdge + ?Sized>(
    edge: &E,
    direction: EdgeDirection,
) -> Option<f64> {
    let speed = edge.speed(direction);
    (speed > 0.0).then_some(speed)
}

/// Travel time at the encoded speed of the edge, plus `heading_penalty_ms` when unfavored
pub(crate) fn encoded_speed_ms<E: GraphEdge + ?Sized>(
    edge: &E,
    direction: EdgeDirection,
    heading_penalty_ms: Milliseconds,
) -> Result<Milliseconds, ComputationError> {
    let Some(speed) = accessible_speed(edge, direction) else {
        return Ok(MAX_DURATION);
    };

    let ms = seconds_to_ms(edge.distance().value() / speed * SPEED_CONV)?;
    if !edge.is_unfavored() {
        return Ok(ms);
    }

    ms.checked_add(heading_penalty_ms)
        .filter(|ms| *ms < MAX_DURATION)
        .ok_or(ComputationError::NotFinite {
            quantity: "duration",
        })
}

pub(crate) fn seconds_to_ms(seconds: f64) -> Result<Milliseconds, ComputationError> {
    let seconds = check_quantity("duration", seconds)?;
    let ms = (seconds * 1000.0).round();

    if ms >= MAX_DURATION as f64 {
        return Err(ComputationError::NotFinite {
            quantity: "duration",
        });
    }

    Ok(ms as Milliseconds)
}
