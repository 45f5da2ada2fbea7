use crate::models::{ActivityLevel, Climate};

/// Energy density of carbohydrate and protein, kcal per gram.
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy density of fat, kcal per gram.
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Healthy BMI band used for the ideal weight range.
pub const IDEAL_BMI_MIN: f64 = 18.5;
pub const IDEAL_BMI_MAX: f64 = 24.9;

// ─────────────────────────────────────────────────────────────────────────────
// Calorie adjustment
// ─────────────────────────────────────────────────────────────────────────────

/// Target calories never drop below this share of TDEE when losing weight.
pub const MIN_TDEE_FRACTION: f64 = 0.8;

/// BMI above which the largest deficit tier applies.
pub const OBESE_BMI: f64 = 30.0;

/// BMI above which the moderate deficit tier applies.
pub const OVERWEIGHT_BMI: f64 = 25.0;

/// BMI below which the larger surplus tier applies.
pub const UNDERWEIGHT_BMI: f64 = 18.5;

/// Daily deficits (kcal) and the weekly change they are expected to produce (lb).
pub const DEFICIT_OBESE: (f64, f64) = (750.0, -1.5);
pub const DEFICIT_OVERWEIGHT: (f64, f64) = (500.0, -1.0);
pub const DEFICIT_NORMAL: (f64, f64) = (250.0, -0.5);

/// Daily surpluses (kcal) and the expected weekly change (lb).
pub const SURPLUS_UNDERWEIGHT: (f64, f64) = (500.0, 1.0);
pub const SURPLUS_DEFAULT: (f64, f64) = (300.0, 0.6);

pub const WEIGHT_LOSS_SAFETY_NOTE: &str =
    "Consult healthcare provider before significant calorie restriction";

// ─────────────────────────────────────────────────────────────────────────────
// Macro rebalancing
// ─────────────────────────────────────────────────────────────────────────────

/// Protein RDA in grams per kilogram of body weight.
pub const PROTEIN_GRAMS_PER_KG: f64 = 0.8;

/// Protein share never falls below this percentage.
pub const MIN_PROTEIN_PERCENT: f64 = 15.0;

/// Fat share never exceeds this percentage.
pub const MAX_FAT_PERCENT: f64 = 30.0;

/// Saturated fat limit as a fraction of total calories.
pub const SATURATED_FAT_FRACTION: f64 = 0.10;

/// Body weight assumed when none is supplied.
pub const DEFAULT_BODY_WEIGHT_KG: f64 = 70.0;

// ─────────────────────────────────────────────────────────────────────────────
// Hydration
// ─────────────────────────────────────────────────────────────────────────────

/// ml of water per kg of body weight, by age band.
pub const WATER_ML_PER_KG_YOUNG: f64 = 37.0;
pub const WATER_ML_PER_KG_ADULT: f64 = 35.0;
pub const WATER_ML_PER_KG_SENIOR: f64 = 30.0;

pub const WATER_YOUNG_BELOW_AGE: u32 = 30;
pub const WATER_SENIOR_ABOVE_AGE: u32 = 65;

pub const WATER_MALE_MULTIPLIER: f64 = 1.1;

/// Size of one glass of water in ml.
pub const WATER_GLASS_ML: f64 = 250.0;

// ─────────────────────────────────────────────────────────────────────────────
// Micronutrients (RDA)
// ─────────────────────────────────────────────────────────────────────────────

pub const SODIUM_LIMIT_MG: u32 = 2000;
pub const SALT_LIMIT_G: u32 = 5;
pub const POTASSIUM_MG: u32 = 3500;

/// Age boundary for the fiber, calcium and female iron tables.
pub const RDA_OLDER_ADULT_AGE: u32 = 50;

/// Age above which the vitamin D target rises.
pub const VITAMIN_D_ELDERLY_AGE: u32 = 70;

/// TDEE multiplier per activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::SuperActive => 1.9,
    }
}

/// Extra water in ml per activity level.
pub fn activity_water_bonus_ml(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 0.0,
        ActivityLevel::LightlyActive => 300.0,
        ActivityLevel::ModeratelyActive => 500.0,
        ActivityLevel::VeryActive => 750.0,
        ActivityLevel::SuperActive => 1000.0,
    }
}

/// Water multiplier per climate.
pub fn climate_multiplier(climate: Climate) -> f64 {
    match climate {
        Climate::Cold => 0.9,
        Climate::Temperate => 1.0,
        Climate::Hot => 1.3,
        Climate::Tropical => 1.5,
    }
}

/// One row of the BMI classification table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiTier {
    /// Exclusive upper bound; `f64::INFINITY` for the last tier.
    pub upper: f64,
    pub category: &'static str,
    pub color: &'static str,
    pub health_risk: &'static str,
    pub recommendation: &'static str,
}

/// WHO BMI categories, ascending. The first tier whose `upper` exceeds the BMI wins.
pub const BMI_TIERS: [BmiTier; 7] = [
    BmiTier {
        upper: 16.0,
        category: "Severely Underweight",
        color: "red",
        health_risk: "High risk of malnutrition",
        recommendation: "Consult healthcare provider immediately",
    },
    BmiTier {
        upper: 18.5,
        category: "Underweight",
        color: "blue",
        health_risk: "Possible nutritional deficiency",
        recommendation: "Consider consulting a nutritionist",
    },
    BmiTier {
        upper: 25.0,
        category: "Normal weight",
        color: "green",
        health_risk: "Low risk",
        recommendation: "Maintain current weight with balanced diet",
    },
    BmiTier {
        upper: 30.0,
        category: "Overweight",
        color: "yellow",
        health_risk: "Increased risk of health problems",
        recommendation: "Consider modest weight reduction",
    },
    BmiTier {
        upper: 35.0,
        category: "Obesity Class I",
        color: "orange",
        health_risk: "Moderate risk of health problems",
        recommendation: "Weight reduction recommended",
    },
    BmiTier {
        upper: 40.0,
        category: "Obesity Class II",
        color: "red",
        health_risk: "High risk of health problems",
        recommendation: "Medical supervision for weight loss advised",
    },
    BmiTier {
        upper: f64::INFINITY,
        category: "Obesity Class III",
        color: "red",
        health_risk: "Very high risk of health problems",
        recommendation: "Immediate medical intervention recommended",
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Report text
// ─────────────────────────────────────────────────────────────────────────────

pub const FAT_NOTE: &str =
    "WHO recommends <30% of total calories from fat, <10% from saturated fat";

pub const RECOMMENDED_FRUIT_VEG: &str = "400g (5 portions) minimum - WHO recommendation";
pub const RECOMMENDED_FREE_SUGARS: &str = "Less than 10% of total calories (ideally <5%)";
pub const RECOMMENDED_ACTIVITY: &str = "At least 150 minutes moderate-intensity per week";
pub const RECOMMENDATIONS_NOTE: &str =
    "Calculations based on WHO guidelines and peer-reviewed research";

/// Method label stored with every saved calculation.
pub const CALCULATION_METHOD: &str = "Mifflin-St Jeor + WHO Guidelines";

/// Shown alongside every meal plan.
pub const MEAL_PLAN_TIPS: [&str; 5] = [
    "Include vegetables with every meal",
    "Choose whole grains over refined grains",
    "Include lean protein at each meal",
    "Stay hydrated throughout the day",
    "Limit processed foods and added sugars",
];
