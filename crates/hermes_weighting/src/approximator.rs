use tracing::{trace, warn};

use crate::error::{ComputationError, ConfigurationError, check_quantity, ensure_positive};
use crate::geopoint::GeoPoint;
use crate::node_access::{NodeAccess, NodeId};
use crate::weighting::{Weight, Weighting};

/// Goal distance heuristic of an A* search.
///
/// An instance belongs to one search direction: `set_to` mutates the goal that
/// `approximate` reads. Use `reverse` to get an instance for the other direction.
pub trait WeightApproximator {
    fn set_to(&mut self, goal: NodeId);

    /// Estimated weight from `node` to the goal, 0 until a goal is set
    fn approximate(&self, node: NodeId) -> Result<Weight, ComputationError>;

    fn reverse(&self) -> Self
    where
        Self: Sized;
}

/// Turns the beeline distance to the goal into a weight.
///
/// By default the weight is `min_weight(distance) * epsilon`, which never
/// overestimates for `epsilon <= 1`. Weightings exposing a
/// [`GoalEnergyEstimator`](crate::weighting::GoalEnergyEstimator) are asked for
/// their own estimate instead, unless the energy estimate is disabled. That
/// estimate is not guaranteed to be admissible.
pub struct BeelineApproximator<'a, N, W>
where
    N: NodeAccess,
    W: Weighting,
{
    node_access: &'a N,
    weighting: &'a W,

    goal: Option<GeoPoint>,
    epsilon: f64,
    energy_estimate: bool,
}

impl<'a, N, W> BeelineApproximator<'a, N, W>
where
    N: NodeAccess,
    W: Weighting,
{
    pub fn new(node_access: &'a N, weighting: &'a W) -> Self {
        BeelineApproximator {
            node_access,
            weighting,
            goal: None,
            epsilon: 1.0,
            energy_estimate: true,
        }
    }

    /// Values above 1 speed up the search at the price of possibly suboptimal paths
    pub fn with_epsilon(mut self, epsilon: f64) -> Result<Self, ConfigurationError> {
        self.epsilon = ensure_positive("epsilon", epsilon)?;

        if epsilon > 1.0 {
            warn!(
                "Beeline approximation with epsilon {} may overestimate, paths may be suboptimal",
                epsilon
            );
        }

        Ok(self)
    }

    /// Disabled, energy weightings fall back to their provable `min_weight`
    pub fn with_energy_estimate(mut self, energy_estimate: bool) -> Self {
        self.energy_estimate = energy_estimate;
        self
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn goal(&self) -> Option<&GeoPoint> {
        self.goal.as_ref()
    }
}

impl<N, W> WeightApproximator for BeelineApproximator<'_, N, W>
where
    N: NodeAccess,
    W: Weighting,
{
    fn set_to(&mut self, goal: NodeId) {
        trace!("Beeline approximation towards node {}", goal);
        self.goal = Some(self.node_access.node_geometry(goal));
    }

    fn approximate(&self, node: NodeId) -> Result<Weight, ComputationError> {
        let Some(goal) = self.goal.as_ref() else {
            return Ok(0.0);
        };

        let from = self.node_access.node_geometry(node);
        let distance = from.haversine_distance(goal);

        let estimator = self
            .weighting
            .goal_energy_estimator()
            .filter(|_| self.energy_estimate);

        if let Some(estimator) = estimator {
            let elevation_change = goal
                .elevation()
                .zip(from.elevation())
                .map(|(to, from)| to - from);

            return estimator.estimate_energy_to_goal(distance, elevation_change);
        }

        check_quantity("estimate", self.weighting.min_weight(distance) * self.epsilon)
    }

    fn reverse(&self) -> Self {
        BeelineApproximator {
            node_access: self.node_access,
            weighting: self.weighting,
            goal: None,
            epsilon: self.epsilon,
            energy_estimate: self.energy_estimate,
        }
    }
}
