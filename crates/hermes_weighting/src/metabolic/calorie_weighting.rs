use tracing::debug;

use crate::constants::{JOULES_PER_KCAL, MAX_WEIGHT};
use crate::edge_direction::EdgeDirection;
use crate::error::{ComputationError, ConfigurationError, check_quantity, ensure_non_negative};
use crate::grade::GradeModel;
use crate::graph_edge::GraphEdge;
use crate::meters::Meters;
use crate::weighting::{
    GoalEnergyEstimator, Milliseconds, Weight, Weighting, accessible_speed, encoded_speed_ms,
};

use super::metabolic_rate::{self, basal_metabolic_rate, resting_rate, standing_metabolic_rate};
use super::traveler_profile::TravelerProfile;
use super::velocity_model::VelocityModel;

/// Energy, in kcal, a traveler spends walking an edge.
///
/// The grade of the edge drives both the walking velocity (depending on the
/// velocity model) and the metabolic rate, which never drops below the resting
/// rate of the traveler.
#[derive(Debug, Clone)]
pub struct CalorieWeighting {
    vehicle: String,
    profile: TravelerProfile,
    velocity_model: VelocityModel,
    grade_model: GradeModel,
    heading_penalty: f64,
    heading_penalty_ms: Milliseconds,

    /// Resting rate of the profile in watts
    resting_rate: f64,
    /// Fastest velocity of the velocity model on clamped grades
    max_velocity: f64,
}

impl CalorieWeighting {
    pub fn new(
        vehicle: impl Into<String>,
        profile: TravelerProfile,
        velocity_model: VelocityModel,
        grade_model: GradeModel,
        heading_penalty: f64,
    ) -> Result<Self, ConfigurationError> {
        let heading_penalty = ensure_non_negative("heading_penalty", heading_penalty)?;
        let vehicle = vehicle.into();

        let resting_rate = resting_rate(&profile);
        let max_velocity = velocity_model.max_velocity(grade_model.floor());

        debug!(
            "Created calorie weighting for {} with {:?}, resting {:.2} W, max {:.3} m/s",
            vehicle, velocity_model, resting_rate, max_velocity
        );

        Ok(CalorieWeighting {
            vehicle,
            profile,
            velocity_model,
            grade_model,
            heading_penalty,
            heading_penalty_ms: (heading_penalty * 1000.0).round() as Milliseconds,
            resting_rate,
            max_velocity,
        })
    }

    pub fn profile(&self) -> &TravelerProfile {
        &self.profile
    }

    pub fn velocity_model(&self) -> VelocityModel {
        self.velocity_model
    }

    pub fn grade_model(&self) -> GradeModel {
        self.grade_model
    }

    pub fn heading_penalty(&self) -> f64 {
        self.heading_penalty
    }

    pub fn calc_elevation_change<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> f64 {
        self.grade_model.elevation_change(edge, direction)
    }

    /// Length of the full geometry of the edge
    pub fn calc_distance<E: GraphEdge + ?Sized>(&self, edge: &E) -> Meters {
        self.grade_model.planar_distance(edge)
    }

    pub fn calc_percent_grade<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> f64 {
        self.grade_model.edge_percent_grade(edge, direction)
    }

    pub fn calc_velocity(&self, grade: f64) -> f64 {
        self.velocity_model.velocity(grade)
    }

    pub fn calc_exact_time_in_seconds<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> f64 {
        let distance = self.calc_distance(edge);
        let grade = self
            .grade_model
            .percent_grade(self.calc_elevation_change(edge, direction), distance);

        distance.value() / self.calc_velocity(grade)
    }

    /// Watts spent walking at `velocity` on `grade`, at least the resting rate
    pub fn calc_metabolic_rate(&self, grade: f64, velocity: f64) -> f64 {
        metabolic_rate::metabolic_rate(&self.profile, self.resting_rate, velocity, grade)
    }

    pub fn calc_downhill_credit(&self, grade: f64, velocity: f64) -> f64 {
        metabolic_rate::downhill_credit(&self.profile, grade, velocity)
    }

    pub fn calc_bmr(&self) -> f64 {
        basal_metabolic_rate(&self.profile)
    }

    pub fn calc_smr(&self) -> f64 {
        standing_metabolic_rate(&self.profile)
    }

    pub fn calc_resting_correction(&self) -> f64 {
        metabolic_rate::resting_correction(&self.profile, self.calc_smr())
    }

    pub fn resting_rate(&self) -> f64 {
        self.resting_rate
    }

    /// Energy spent walking the edge, ignoring access and heading penalty
    pub fn calc_kcal<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> Result<Weight, ComputationError> {
        let distance = self.calc_distance(edge);
        let grade = self
            .grade_model
            .percent_grade(self.calc_elevation_change(edge, direction), distance);
        let velocity = self.calc_velocity(grade);

        self.energy(
            self.calc_metabolic_rate(grade, velocity),
            distance.value() / velocity,
        )
    }

    fn energy(&self, rate: f64, seconds: f64) -> Result<Weight, ComputationError> {
        check_quantity("energy", rate * seconds / JOULES_PER_KCAL)
    }

    /// Energy spent waiting out the heading penalty
    fn heading_penalty_kcal(&self) -> f64 {
        self.resting_rate.max(0.0) * self.heading_penalty / JOULES_PER_KCAL
    }
}

impl Weighting for CalorieWeighting {
    fn name(&self) -> &'static str {
        "calorie"
    }

    fn vehicle(&self) -> &str {
        &self.vehicle
    }

    /// Every edge costs at least the resting rate for the time it takes at the
    /// fastest velocity, and its geometry is never shorter than the beeline.
    fn min_weight(&self, distance: Meters) -> Weight {
        self.resting_rate.max(0.0) * (distance.value() / self.max_velocity) / JOULES_PER_KCAL
    }

    fn calc_edge_weight<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> Result<Weight, ComputationError> {
        if accessible_speed(edge, direction).is_none() {
            return Ok(MAX_WEIGHT);
        }

        let kcal = self.calc_kcal(edge, direction)?;
        if edge.is_unfavored() {
            return Ok(kcal + self.heading_penalty_kcal());
        }

        Ok(kcal)
    }

    /// Travel time at the encoded speed, as for the fastest weighting
    fn calc_edge_ms<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> Result<Milliseconds, ComputationError> {
        encoded_speed_ms(edge, direction, self.heading_penalty_ms)
    }

    fn goal_energy_estimator(&self) -> Option<&dyn GoalEnergyEstimator> {
        Some(self)
    }
}

impl GoalEnergyEstimator for CalorieWeighting {
    /// Walks the beeline at the nominal velocity on the average grade towards the goal.
    /// Not proven to never overestimate the optimal energy.
    fn estimate_energy_to_goal(
        &self,
        distance: Meters,
        elevation_change: Option<f64>,
    ) -> Result<Weight, ComputationError> {
        let grade = elevation_change
            .map(|change| self.grade_model.percent_grade(change, distance))
            .unwrap_or(0.0);
        let velocity = self.velocity_model.nominal_velocity();

        self.energy(
            self.calc_metabolic_rate(grade, velocity),
            distance.value() / velocity,
        )
    }
}
