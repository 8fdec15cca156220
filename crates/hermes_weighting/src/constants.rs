use crate::weighting::{Milliseconds, Weight};

/// Weight of an edge that cannot be traversed in the requested direction
pub const MAX_WEIGHT: Weight = f64::INFINITY;
pub const MAX_DURATION: Milliseconds = u64::MAX;

pub(crate) const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// km/h to m/s
pub const SPEED_CONV: f64 = 3.6;

pub const JOULES_PER_KCAL: f64 = 4184.0;
pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

pub const DEFAULT_GRADE_FLOOR: f64 = -8.0;

/// 3 mph in m/s
pub const NOMINAL_WALKING_SPEED: f64 = 1.34112;

pub const DEFAULT_HEADING_PENALTY_SECONDS: f64 = 300.0;

pub const FOOT_MAX_SPEED_KMH: f64 = 15.0;

/// Multiplier turning a basal metabolic rate into a standing one
pub(crate) const ACTIVITY_FACTOR: f64 = 1.2;

pub const MAX_LOAD_KG: f64 = 51.0;
pub const DEFAULT_MAX_LOAD_RATIO: f64 = 0.8;
pub const DEFAULT_TERRAIN_COEFFICIENT: f64 = 1.0;

// Reference traveler the resting correction was regressed on
pub(crate) const REFERENCE_HEIGHT_CM: f64 = 151.0;
pub(crate) const REFERENCE_AGE_YEARS: f64 = 18.0;
