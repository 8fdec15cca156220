use serde::Deserialize;

use crate::constants::{DEFAULT_MAX_LOAD_RATIO, DEFAULT_TERRAIN_COEFFICIENT, MAX_LOAD_KG};
use crate::error::{ConfigurationError, ensure_non_negative, ensure_positive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

/// Body of the traveler the energy expenditure is computed for.
/// Only obtainable through validation, see [`TravelerProfileConfig::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct TravelerProfile {
    weight: f64,
    load: f64,
    height: f64,
    age: f64,
    sex: Sex,
    terrain: f64,
}

impl TravelerProfile {
    /// Profile walking on paved terrain with the default load limit
    pub fn new(
        weight: f64,
        load: f64,
        height: f64,
        age: f64,
        sex: Sex,
    ) -> Result<Self, ConfigurationError> {
        TravelerProfileConfig {
            weight,
            load,
            height,
            age,
            sex,
            terrain: DEFAULT_TERRAIN_COEFFICIENT,
            max_load_ratio: DEFAULT_MAX_LOAD_RATIO,
        }
        .build()
    }

    /// Body weight in kg
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Carried load in kg
    pub fn load(&self) -> f64 {
        self.load
    }

    /// Height in cm
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }

    pub fn terrain(&self) -> f64 {
        self.terrain
    }

    /// Body weight plus load
    pub fn total_weight(&self) -> f64 {
        self.weight + self.load
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TravelerProfileConfig {
    pub weight: f64,
    #[serde(default)]
    pub load: f64,
    pub height: f64,
    pub age: f64,
    pub sex: Sex,
    #[serde(default = "default_terrain")]
    pub terrain: f64,
    /// Heaviest load accepted, as a fraction of the body weight
    #[serde(default = "default_max_load_ratio")]
    pub max_load_ratio: f64,
}

fn default_terrain() -> f64 {
    DEFAULT_TERRAIN_COEFFICIENT
}

fn default_max_load_ratio() -> f64 {
    DEFAULT_MAX_LOAD_RATIO
}

impl TravelerProfileConfig {
    pub fn build(&self) -> Result<TravelerProfile, ConfigurationError> {
        let weight = ensure_positive("weight", self.weight)?;
        let height = ensure_positive("height", self.height)?;
        let age = ensure_positive("age", self.age)?;
        let terrain = ensure_positive("terrain", self.terrain)?;
        let load = ensure_non_negative("load", self.load)?;
        let max_load_ratio = ensure_non_negative("max_load_ratio", self.max_load_ratio)?;

        let limit = (weight * max_load_ratio).min(MAX_LOAD_KG);
        if load > limit {
            return Err(ConfigurationError::LoadTooHeavy { load, limit });
        }

        Ok(TravelerProfile {
            weight,
            load,
            height,
            age,
            sex: self.sex,
            terrain,
        })
    }
}
