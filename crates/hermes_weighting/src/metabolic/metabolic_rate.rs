//! Energy expenditure of walking, in watts.
//!
//! Locomotion follows the Pandolf load carriage equation with the Santee
//! downhill correction. The resting floor is the Harris-Benedict basal rate
//! scaled to a standing rate, plus a correction regressed on body weight and
//! adjusted for the deviation from a 151 cm, 18 year old, unloaded traveler.

use crate::constants::{
    ACTIVITY_FACTOR, JOULES_PER_KCAL, REFERENCE_AGE_YEARS, REFERENCE_HEIGHT_CM, SECONDS_PER_DAY,
};

use super::traveler_profile::{Sex, TravelerProfile};

struct HarrisBenedict {
    intercept: f64,
    weight: f64,
    height: f64,
    age: f64,
}

const FEMALE_BMR: HarrisBenedict = HarrisBenedict {
    intercept: 655.0,
    weight: 9.6,
    height: 1.7,
    age: 4.7,
};

const MALE_BMR: HarrisBenedict = HarrisBenedict {
    intercept: 66.0,
    weight: 13.7,
    height: 5.0,
    age: 6.8,
};

struct RestingCorrection {
    log_weight: f64,
    intercept: f64,
    per_cm: f64,
    per_kg_load: f64,
    per_year: f64,
}

const FEMALE_CORRECTION: RestingCorrection = RestingCorrection {
    log_weight: -0.278,
    intercept: 1.6773,
    per_cm: 0.000546551724137932,
    per_kg_load: 0.00764607843137255,
    per_year: 0.00196829268292683,
};

const MALE_CORRECTION: RestingCorrection = RestingCorrection {
    log_weight: -0.183,
    intercept: 1.3233,
    per_cm: 0.00121509433962264,
    per_kg_load: 0.00698137254901961,
    per_year: 0.00233536585365854,
};

/// `M = 1.5W + 2(W+L)(L/W)² + η(W+L)[1.5v² + 0.35·v·G]`
pub fn locomotion_rate(profile: &TravelerProfile, velocity: f64, grade: f64) -> f64 {
    let weight = profile.weight();
    let total_weight = profile.total_weight();
    let load_ratio = profile.load() / weight;

    1.5 * weight
        + 2.0 * total_weight * load_ratio * load_ratio
        + profile.terrain()
            * total_weight
            * (1.5 * velocity * velocity + 0.35 * velocity * grade)
}

/// `C = −(G·(W+L)·v)/3.5 − (W+L)(6−G)²/W + (25 − v²)`, only applies to negative grades
pub fn downhill_credit(profile: &TravelerProfile, grade: f64, velocity: f64) -> f64 {
    let total_weight = profile.total_weight();

    -(grade * total_weight * velocity) / 3.5
        - total_weight * (6.0 - grade).powi(2) / profile.weight()
        + (25.0 - velocity * velocity)
}

/// Locomotion rate minus the downhill credit when walking down
pub fn net_metabolic_rate(profile: &TravelerProfile, velocity: f64, grade: f64) -> f64 {
    let rate = locomotion_rate(profile, velocity, grade);

    if grade < 0.0 {
        rate - downhill_credit(profile, grade, velocity)
    } else {
        rate
    }
}

pub fn basal_metabolic_rate(profile: &TravelerProfile) -> f64 {
    let coefficients = match profile.sex() {
        Sex::Female => FEMALE_BMR,
        Sex::Male => MALE_BMR,
    };

    let kcal_per_day = coefficients.intercept
        + coefficients.weight * profile.weight()
        + coefficients.height * profile.height()
        - coefficients.age * profile.age();

    kcal_per_day * JOULES_PER_KCAL / SECONDS_PER_DAY
}

pub fn standing_metabolic_rate(profile: &TravelerProfile) -> f64 {
    ACTIVITY_FACTOR * basal_metabolic_rate(profile)
}

/// Fraction of the standing rate to add to it
pub fn resting_correction_percentage(profile: &TravelerProfile) -> f64 {
    let coefficients = match profile.sex() {
        Sex::Female => FEMALE_CORRECTION,
        Sex::Male => MALE_CORRECTION,
    };

    coefficients.log_weight * profile.weight().ln()
        + coefficients.intercept
        + coefficients.per_cm * (profile.height() - REFERENCE_HEIGHT_CM)
        - coefficients.per_kg_load * profile.load()
        - coefficients.per_year * (profile.age() - REFERENCE_AGE_YEARS)
}

pub fn resting_correction(profile: &TravelerProfile, standing_rate: f64) -> f64 {
    standing_rate * resting_correction_percentage(profile)
}

/// Lowest rate a traveler spends, whatever the locomotion
pub fn resting_rate(profile: &TravelerProfile) -> f64 {
    let standing_rate = standing_metabolic_rate(profile);
    standing_rate + resting_correction(profile, standing_rate)
}

/// Net rate, floored at the resting rate. A NaN net rate is kept as is.
pub fn metabolic_rate(
    profile: &TravelerProfile,
    resting_rate: f64,
    velocity: f64,
    grade: f64,
) -> f64 {
    let rate = net_metabolic_rate(profile, velocity, grade);
    if rate < resting_rate { resting_rate } else { rate }
}
