use serde::Deserialize;

use crate::constants::{NOMINAL_WALKING_SPEED, SPEED_CONV};
use crate::error::{ConfigurationError, ensure_positive};

/// Walking velocity in m/s
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VelocityModel {
    Fixed { speed: f64 },
    /// `6·e^(−3.5·(grade/100 + 0.05))` km/h
    GradeDependent,
}

impl VelocityModel {
    pub fn fixed(speed: f64) -> Result<Self, ConfigurationError> {
        Ok(VelocityModel::Fixed {
            speed: ensure_positive("walking_speed", speed)?,
        })
    }

    pub fn velocity(&self, grade: f64) -> f64 {
        match self {
            VelocityModel::Fixed { speed } => *speed,
            VelocityModel::GradeDependent => {
                6.0 * (-3.5 * (grade / 100.0 + 0.05)).exp() / SPEED_CONV
            }
        }
    }

    /// Fastest velocity reachable on grades clamped to `grade_floor`.
    /// The grade dependent velocity decreases with the grade.
    pub fn max_velocity(&self, grade_floor: f64) -> f64 {
        self.velocity(grade_floor)
    }

    /// Constant velocity used for goal estimates
    pub fn nominal_velocity(&self) -> f64 {
        match self {
            VelocityModel::Fixed { speed } => *speed,
            VelocityModel::GradeDependent => NOMINAL_WALKING_SPEED,
        }
    }
}

/// Versions of the calorie formula, differing in their velocity model.
///
/// - `V1`: constant walking velocity, 3 mph unless overridden
/// - `V2`: velocity decreasing exponentially with the grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaVariant {
    #[default]
    V1,
    V2,
}

impl FormulaVariant {
    pub fn velocity_model(
        &self,
        walking_speed: Option<f64>,
    ) -> Result<VelocityModel, ConfigurationError> {
        match self {
            FormulaVariant::V1 => {
                VelocityModel::fixed(walking_speed.unwrap_or(NOMINAL_WALKING_SPEED))
            }
            FormulaVariant::V2 => Ok(VelocityModel::GradeDependent),
        }
    }
}
