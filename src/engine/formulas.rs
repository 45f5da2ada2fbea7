//! Stateless body-metric formulas.
//!
//! Every function is pure and unrounded unless stated otherwise; rounding for
//! presentation happens once, in the assembler.

use crate::engine::constants::*;
use crate::models::{ActivityLevel, Climate, Gender, IdealWeightRange, SodiumTarget};

/// Body Mass Index from weight in kg and height in cm.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal metabolic rate, Mifflin-St Jeor equation.
///
/// Male: `10w + 6.25h - 5a + 5`, female: `10w + 6.25h - 5a - 161`.
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    if gender.is_male() { base + 5.0 } else { base - 161.0 }
}

/// Basal metabolic rate, Harris-Benedict equation (1984 revision).
///
/// Shown next to [`bmr`] for comparison; nothing downstream consumes it.
pub fn bmr_alternate(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let age = age as f64;
    if gender.is_male() {
        13.397 * weight_kg + 4.799 * height_cm - 5.677 * age + 88.362
    } else {
        9.247 * weight_kg + 3.098 * height_cm - 4.330 * age + 447.593
    }
}

/// Total daily energy expenditure.
pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity_multiplier(activity)
}

/// Weight range (kg) that puts the given height inside the healthy BMI band.
pub fn ideal_weight_range(height_cm: f64) -> IdealWeightRange {
    let height_m = height_cm / 100.0;
    let squared = height_m * height_m;
    IdealWeightRange {
        min: IDEAL_BMI_MIN * squared,
        max: IDEAL_BMI_MAX * squared,
    }
}

/// Recommended daily water intake in ml, rounded to the nearest ml.
pub fn water_intake_ml(
    weight_kg: f64,
    activity: ActivityLevel,
    age: u32,
    gender: Gender,
    climate: Climate,
) -> i64 {
    let per_kg = if age < WATER_YOUNG_BELOW_AGE {
        WATER_ML_PER_KG_YOUNG
    } else if age > WATER_SENIOR_ABOVE_AGE {
        WATER_ML_PER_KG_SENIOR
    } else {
        WATER_ML_PER_KG_ADULT
    };

    let mut base = weight_kg * per_kg;
    if gender.is_male() {
        base *= WATER_MALE_MULTIPLIER;
    }

    let total = (base + activity_water_bonus_ml(activity)) * climate_multiplier(climate);
    total.round() as i64
}

/// Looks up the WHO category for a BMI. Bounds are exclusive: 25.0 is overweight.
pub fn bmi_classification(bmi: f64) -> &'static BmiTier {
    BMI_TIERS
        .iter()
        .find(|tier| bmi < tier.upper)
        .unwrap_or(&BMI_TIERS[BMI_TIERS.len() - 1])
}

/// Daily fiber target in grams.
pub fn fiber_target(age: u32, gender: Gender) -> u32 {
    let younger = age <= RDA_OLDER_ADULT_AGE;
    match (gender, younger) {
        (Gender::Male, true) => 38,
        (Gender::Male, false) => 30,
        (Gender::Female, true) => 25,
        (Gender::Female, false) => 21,
    }
}

/// Flat RDA lookup for one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RdaTargets {
    /// mg/day
    pub vitamin_c: u32,
    /// µg/day
    pub vitamin_d: u32,
    /// mg/day
    pub calcium: u32,
    /// mg/day
    pub iron: u32,
    /// mg/day
    pub potassium: u32,
    /// g/day
    pub fiber: u32,
}

pub fn micronutrient_targets(age: u32, gender: Gender) -> RdaTargets {
    let older = age > RDA_OLDER_ADULT_AGE;
    RdaTargets {
        vitamin_c: if gender.is_male() { 90 } else { 75 },
        vitamin_d: if age > VITAMIN_D_ELDERLY_AGE { 20 } else { 15 },
        calcium: if older { 1200 } else { 1000 },
        iron: match gender {
            Gender::Male => 8,
            Gender::Female if older => 8,
            Gender::Female => 18,
        },
        potassium: POTASSIUM_MG,
        fiber: fiber_target(age, gender),
    }
}

/// WHO sodium ceiling; the same for everyone.
pub fn sodium_target() -> SodiumTarget {
    SodiumTarget {
        sodium_mg: SODIUM_LIMIT_MG,
        salt_grams: SALT_LIMIT_G,
    }
}
