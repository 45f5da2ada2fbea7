use serde::{Deserialize, Serialize};

use super::PersonalInfo;

/// WHO BMI category with its display colour and advice text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiClassification {
    pub category: String,
    pub color: String,
    pub health_risk: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightRange {
    pub min: f64,
    pub max: f64,
}

/// Body metrics and energy targets, rounded for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// BMI to one decimal place.
    pub bmi: f64,
    pub bmi_classification: BmiClassification,
    /// Mifflin-St Jeor BMR, kcal/day.
    pub bmr: i64,
    /// Harris-Benedict BMR, kcal/day, for comparison only.
    pub bmr_alternate: i64,
    pub tdee: i64,
    pub target_calories: i64,
    /// Expected change in lb/week; negative when losing.
    pub weekly_weight_change: f64,
    pub ideal_weight: IdealWeightRange,
    /// Daily water in ml.
    pub water_intake: i64,
    /// Daily water in 250 ml glasses.
    pub water_glasses: i64,
    pub safety_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbTarget {
    pub calories: i64,
    pub grams: i64,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinTarget {
    pub calories: i64,
    pub grams: i64,
    pub percentage: i64,
    pub recommended_grams: i64,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FatTarget {
    pub calories: i64,
    pub grams: i64,
    pub percentage: i64,
    pub saturated_fat_limit: i64,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientBreakdown {
    pub carbs: CarbTarget,
    pub protein: ProteinTarget,
    pub fat: FatTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SodiumTarget {
    pub sodium_mg: u32,
    pub salt_grams: u32,
}

/// Vitamin C in mg, vitamin D in µg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitaminTargets {
    pub vitamin_c: u32,
    pub vitamin_d: u32,
}

/// All values in mg/day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineralTargets {
    pub calcium: u32,
    pub iron: u32,
    pub potassium: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicronutrientTargets {
    /// Grams per day.
    pub fiber: u32,
    pub sodium: SodiumTarget,
    pub vitamins: VitaminTargets,
    pub minerals: MineralTargets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub daily_fruit_veg: String,
    pub free_sugars: String,
    pub physical_activity: String,
    pub note: String,
}

/// Complete result of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionProfile {
    pub personal_info: PersonalInfo,
    pub metrics: Metrics,
    pub macronutrients: MacronutrientBreakdown,
    pub micronutrients: MicronutrientTargets,
    pub recommendations: Recommendations,
}

/// The subset of a profile kept in calculation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSummary {
    pub bmi: f64,
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub water_intake: i64,
    pub macronutrients: MacronutrientBreakdown,
}

impl From<&NutritionProfile> for ResultsSummary {
    fn from(profile: &NutritionProfile) -> Self {
        Self {
            bmi: profile.metrics.bmi,
            bmr: profile.metrics.bmr,
            tdee: profile.metrics.tdee,
            target_calories: profile.metrics.target_calories,
            water_intake: profile.metrics.water_intake,
            macronutrients: profile.macronutrients.clone(),
        }
    }
}
