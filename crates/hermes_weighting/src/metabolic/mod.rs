pub mod calorie_weighting;
pub mod metabolic_rate;
pub mod traveler_profile;
pub mod velocity_model;

pub use calorie_weighting::CalorieWeighting;
pub use traveler_profile::{Sex, TravelerProfile, TravelerProfileConfig};
pub use velocity_model::{FormulaVariant, VelocityModel};
