use serde::Deserialize;
use tracing::debug;

use crate::approximator::BeelineApproximator;
use crate::constants::{DEFAULT_GRADE_FLOOR, DEFAULT_HEADING_PENALTY_SECONDS, FOOT_MAX_SPEED_KMH};
use crate::edge_direction::EdgeDirection;
use crate::error::{ComputationError, ConfigurationError};
use crate::fastest_weighting::FastestWeighting;
use crate::grade::GradeModel;
use crate::graph_edge::GraphEdge;
use crate::meters::Meters;
use crate::metabolic::{CalorieWeighting, FormulaVariant, TravelerProfileConfig};
use crate::node_access::NodeAccess;
use crate::weighting::{GoalEnergyEstimator, Milliseconds, Weight, Weighting};

fn default_vehicle() -> String {
    String::from("foot")
}

fn default_max_speed_kmh() -> f64 {
    FOOT_MAX_SPEED_KMH
}

fn default_heading_penalty() -> f64 {
    DEFAULT_HEADING_PENALTY_SECONDS
}

fn default_grade_floor() -> f64 {
    DEFAULT_GRADE_FLOOR
}

fn default_epsilon() -> f64 {
    1.0
}

fn default_energy_estimate() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FastestWeightingConfig {
    #[serde(default = "default_vehicle")]
    pub vehicle: String,
    #[serde(default = "default_max_speed_kmh")]
    pub max_speed_kmh: f64,
    /// Seconds
    #[serde(default = "default_heading_penalty")]
    pub heading_penalty: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalorieWeightingConfig {
    #[serde(default = "default_vehicle")]
    pub vehicle: String,
    pub profile: TravelerProfileConfig,
    #[serde(default)]
    pub formula: FormulaVariant,
    /// m/s, overrides the nominal walking speed of the fixed velocity formula
    #[serde(default)]
    pub walking_speed: Option<f64>,
    #[serde(default = "default_grade_floor")]
    pub grade_floor: f64,
    /// Seconds
    #[serde(default = "default_heading_penalty")]
    pub heading_penalty: f64,
}

/// Weighting of a routing request, e.g.
///
/// ```json
/// { "weighting": "calorie", "profile": { "weight": 65, "height": 165, "age": 18, "sex": "female" } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "weighting", rename_all = "snake_case")]
pub enum WeightingConfig {
    Fastest(FastestWeightingConfig),
    Calorie(CalorieWeightingConfig),
}

impl WeightingConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates every parameter and creates the weighting
    pub fn build(&self) -> Result<ConfiguredWeighting, ConfigurationError> {
        match self {
            WeightingConfig::Fastest(config) => Ok(ConfiguredWeighting::Fastest(
                FastestWeighting::new(
                    config.vehicle.clone(),
                    config.max_speed_kmh,
                    config.heading_penalty,
                )?,
            )),
            WeightingConfig::Calorie(config) => {
                let profile = config.profile.build()?;
                let velocity_model = config.formula.velocity_model(config.walking_speed)?;
                let grade_model = GradeModel::new(config.grade_floor)?;

                debug!(
                    "Calorie formula {:?} with grade floor {}%",
                    config.formula, config.grade_floor
                );

                Ok(ConfiguredWeighting::Calorie(CalorieWeighting::new(
                    config.vehicle.clone(),
                    profile,
                    velocity_model,
                    grade_model,
                    config.heading_penalty,
                )?))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApproximatorConfig {
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Let energy weightings estimate the energy to the goal themselves
    #[serde(default = "default_energy_estimate")]
    pub energy_estimate: bool,
}

impl Default for ApproximatorConfig {
    fn default() -> Self {
        ApproximatorConfig {
            epsilon: default_epsilon(),
            energy_estimate: default_energy_estimate(),
        }
    }
}

impl ApproximatorConfig {
    pub fn build<'a, N: NodeAccess, W: Weighting>(
        &self,
        node_access: &'a N,
        weighting: &'a W,
    ) -> Result<BeelineApproximator<'a, N, W>, ConfigurationError> {
        Ok(BeelineApproximator::new(node_access, weighting)
            .with_epsilon(self.epsilon)?
            .with_energy_estimate(self.energy_estimate))
    }
}

/// Weighting selected by a [`WeightingConfig`]
#[derive(Debug, Clone)]
pub enum ConfiguredWeighting {
    Fastest(FastestWeighting),
    Calorie(CalorieWeighting),
}

impl Weighting for ConfiguredWeighting {
    fn name(&self) -> &'static str {
        match self {
            ConfiguredWeighting::Fastest(weighting) => weighting.name(),
            ConfiguredWeighting::Calorie(weighting) => weighting.name(),
        }
    }

    fn vehicle(&self) -> &str {
        match self {
            ConfiguredWeighting::Fastest(weighting) => weighting.vehicle(),
            ConfiguredWeighting::Calorie(weighting) => weighting.vehicle(),
        }
    }

    fn min_weight(&self, distance: Meters) -> Weight {
        match self {
            ConfiguredWeighting::Fastest(weighting) => weighting.min_weight(distance),
            ConfiguredWeighting::Calorie(weighting) => weighting.min_weight(distance),
        }
    }

    fn calc_edge_weight<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> Result<Weight, ComputationError> {
        match self {
            ConfiguredWeighting::Fastest(weighting) => weighting.calc_edge_weight(edge, direction),
            ConfiguredWeighting::Calorie(weighting) => weighting.calc_edge_weight(edge, direction),
        }
    }

    fn calc_edge_ms<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> Result<Milliseconds, ComputationError> {
        match self {
            ConfiguredWeighting::Fastest(weighting) => weighting.calc_edge_ms(edge, direction),
            ConfiguredWeighting::Calorie(weighting) => weighting.calc_edge_ms(edge, direction),
        }
    }

    fn goal_energy_estimator(&self) -> Option<&dyn GoalEnergyEstimator> {
        match self {
            ConfiguredWeighting::Fastest(weighting) => weighting.goal_energy_estimator(),
            ConfiguredWeighting::Calorie(weighting) => weighting.goal_energy_estimator(),
        }
    }
}
