use crate::engine::adjustment::adjust_calories;
use crate::engine::constants::*;
use crate::engine::formulas;
use crate::engine::macros::{MacroTargets, rebalance_macros};
use crate::models::{
    BmiClassification, CarbTarget, Climate, FatTarget, IdealWeightRange, MacroSplit,
    MacronutrientBreakdown, Metrics, MicronutrientTargets, MineralTargets, NutritionProfile,
    PersonalInfo, ProteinTarget, Recommendations, ValidatedRequest, VitaminTargets,
};

/// Rounds to one decimal place, halves toward positive infinity.
pub fn round1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Rounds to the nearest whole number, halves toward positive infinity
/// (`-10.5` becomes `-10`).
pub fn round0(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Builds a complete profile from validated input. Pure: no I/O, no clock.
pub fn assemble_profile(request: &ValidatedRequest) -> NutritionProfile {
    build_profile(&request.personal, request.split, request.climate)
}

pub fn build_profile(
    personal: &PersonalInfo,
    split: MacroSplit,
    climate: Climate,
) -> NutritionProfile {
    let bmi = formulas::bmi(personal.weight, personal.height);
    let tier = formulas::bmi_classification(bmi);
    let bmr = formulas::bmr(personal.weight, personal.height, personal.age, personal.gender);
    let bmr_alternate =
        formulas::bmr_alternate(personal.weight, personal.height, personal.age, personal.gender);
    let tdee = formulas::tdee(bmr, personal.activity_level);
    let ideal = formulas::ideal_weight_range(personal.height);
    let water = formulas::water_intake_ml(
        personal.weight,
        personal.activity_level,
        personal.age,
        personal.gender,
        climate,
    );

    let adjustment = adjust_calories(tdee, personal.goal, bmi);
    let macros = rebalance_macros(adjustment.target_calories, split, Some(personal.weight));
    let rda = formulas::micronutrient_targets(personal.age, personal.gender);

    let metrics = Metrics {
        bmi: round1(bmi),
        bmi_classification: BmiClassification {
            category: tier.category.to_string(),
            color: tier.color.to_string(),
            health_risk: tier.health_risk.to_string(),
            recommendation: tier.recommendation.to_string(),
        },
        bmr: round0(bmr),
        bmr_alternate: round0(bmr_alternate),
        tdee: round0(tdee),
        target_calories: round0(adjustment.target_calories),
        weekly_weight_change: adjustment.weekly_weight_change,
        ideal_weight: IdealWeightRange {
            min: round1(ideal.min),
            max: round1(ideal.max),
        },
        water_intake: water,
        water_glasses: round0(water as f64 / WATER_GLASS_ML),
        safety_note: adjustment.safety_note.map(str::to_string),
    };

    let micronutrients = MicronutrientTargets {
        fiber: rda.fiber,
        sodium: formulas::sodium_target(),
        vitamins: VitaminTargets {
            vitamin_c: rda.vitamin_c,
            vitamin_d: rda.vitamin_d,
        },
        minerals: MineralTargets {
            calcium: rda.calcium,
            iron: rda.iron,
            potassium: rda.potassium,
        },
    };

    NutritionProfile {
        personal_info: *personal,
        metrics,
        macronutrients: present_macros(&macros),
        micronutrients,
        recommendations: Recommendations {
            daily_fruit_veg: RECOMMENDED_FRUIT_VEG.to_string(),
            free_sugars: RECOMMENDED_FREE_SUGARS.to_string(),
            physical_activity: RECOMMENDED_ACTIVITY.to_string(),
            note: RECOMMENDATIONS_NOTE.to_string(),
        },
    }
}

/// Rounds rebalanced macros for output.
pub fn present_macros(macros: &MacroTargets) -> MacronutrientBreakdown {
    let recommended_grams = round0(macros.recommended_protein_grams);
    MacronutrientBreakdown {
        carbs: CarbTarget {
            calories: round0(macros.carbs.calories),
            grams: round0(macros.carbs.grams),
            percentage: round0(macros.carbs.percent),
        },
        protein: ProteinTarget {
            calories: round0(macros.protein.calories),
            grams: round0(macros.protein.grams),
            percentage: round0(macros.protein.percent),
            recommended_grams,
            note: format!("Minimum {}g based on body weight", recommended_grams),
        },
        fat: FatTarget {
            calories: round0(macros.fat.calories),
            grams: round0(macros.fat.grams),
            percentage: round0(macros.fat.percent),
            saturated_fat_limit: round0(macros.saturated_fat_grams),
            note: FAT_NOTE.to_string(),
        },
    }
}
