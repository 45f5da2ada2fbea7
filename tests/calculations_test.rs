#[macro_use]
extern crate assert_float_eq;

use diet_plan_calc::engine::{
    adjust_calories, assemble_profile, bmi, bmi_classification, bmr, build_profile,
    present_macros, rebalance_macros, tdee, WEIGHT_LOSS_SAFETY_NOTE,
};
use diet_plan_calc::models::{
    ActivityLevel, CalculationRequest, Climate, Gender, Goal, MacroSplit, PersonalInfo,
};
use diet_plan_calc::NutriError;

fn person(weight: f64, height: f64, age: u32, gender: Gender, goal: Goal) -> PersonalInfo {
    PersonalInfo {
        weight,
        height,
        age,
        gender,
        activity_level: ActivityLevel::ModeratelyActive,
        goal,
    }
}

fn request() -> CalculationRequest {
    CalculationRequest {
        weight: Some(82.0),
        height: Some(168.0),
        age: Some(44),
        gender: Some("female".to_string()),
        activity_level: Some("lightlyActive".to_string()),
        goal: Some("lose".to_string()),
        climate: Some("hot".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_bmi_matches_definition() {
    for (weight, height) in [(70.0, 175.0), (52.3, 158.0), (120.0, 190.5)] {
        let meters: f64 = height / 100.0;
        assert_float_absolute_eq!(bmi(weight, height), weight / meters.powi(2), 1e-9);
    }
}

#[test]
fn test_male_female_bmr_gap() {
    for (weight, height, age) in [(70.0, 175.0, 30), (55.0, 160.0, 62), (95.0, 188.0, 19)] {
        let gap = bmr(weight, height, age, Gender::Male) - bmr(weight, height, age, Gender::Female);
        assert_float_absolute_eq!(gap, 166.0, 1e-9);
    }
}

#[test]
fn test_tdee_sedentary_and_unknown_activity() {
    let base = bmr(70.0, 175.0, 30, Gender::Male);
    assert_float_absolute_eq!(tdee(base, ActivityLevel::Sedentary), base * 1.2, 1e-9);

    let unknown = ActivityLevel::from_label("couch potato");
    assert_eq!(unknown, ActivityLevel::Sedentary);
    assert_float_absolute_eq!(tdee(base, unknown), base * 1.2, 1e-9);
}

#[test]
fn test_lose_with_normal_bmi_adds_safety_note() {
    let adjustment = adjust_calories(2000.0, Goal::Lose, 22.0);
    assert_float_absolute_eq!(adjustment.target_calories, 1750.0, 1e-9);
    assert_float_absolute_eq!(adjustment.weekly_weight_change, -0.5, 1e-9);
    assert_eq!(adjustment.safety_note, Some(WEIGHT_LOSS_SAFETY_NOTE));
}

#[test]
fn test_lose_with_obese_bmi_hits_floor() {
    let adjustment = adjust_calories(2000.0, Goal::Lose, 32.0);
    assert_float_absolute_eq!(adjustment.target_calories, 1600.0, 1e-9);
    assert_eq!(adjustment.safety_note, None);
}

#[test]
fn test_macro_rebalance_reference_case() {
    let macros = rebalance_macros(1750.0, MacroSplit::default(), Some(70.0));

    assert_float_absolute_eq!(macros.recommended_protein_grams, 56.0, 1e-9);
    assert_float_absolute_eq!(macros.recommended_protein_calories, 224.0, 1e-9);
    assert_float_absolute_eq!(macros.min_protein_percent, 15.0, 1e-9);
    assert_float_absolute_eq!(macros.protein.percent, 20.0, 1e-9);
    assert_float_absolute_eq!(macros.fat.percent, 30.0, 1e-9);
    assert_float_absolute_eq!(macros.carbs.percent, 50.0, 1e-9);
    assert_float_absolute_eq!(macros.carbs.grams, 218.75, 1e-9);
    assert_float_absolute_eq!(macros.protein.grams, 87.5, 1e-9);
    assert_float_absolute_eq!(macros.fat.grams, 525.0 / 9.0, 1e-9);

    let presented = present_macros(&macros);
    assert_eq!(presented.carbs.grams, 219);
    assert_eq!(presented.protein.grams, 88);
    assert_eq!(presented.fat.grams, 58);
}

#[test]
fn test_macro_shares_cover_target_calories() {
    let macros = rebalance_macros(2400.0, MacroSplit::default(), Some(80.0));
    let total = macros.carbs.calories + macros.protein.calories + macros.fat.calories;
    assert_float_absolute_eq!(total, 2400.0, 1e-6);
}

#[test]
fn test_classification_boundaries() {
    assert_eq!(bmi_classification(25.0).category, "Overweight");
    assert_eq!(bmi_classification(24.99).category, "Normal weight");
    assert_eq!(bmi_classification(18.5).category, "Normal weight");
    assert_eq!(bmi_classification(15.9).category, "Severely Underweight");
    assert_eq!(bmi_classification(41.0).category, "Obesity Class III");
}

#[test]
fn test_assembler_is_idempotent() {
    let info = person(82.0, 168.0, 44, Gender::Female, Goal::Lose);
    let split = MacroSplit {
        carb_percent: 40,
        protein_percent: 30,
        fat_percent: 30,
    };

    let first = build_profile(&info, split, Climate::Hot);
    let second = build_profile(&info, split, Climate::Hot);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_request_pipeline_matches_direct_build() {
    let validated = request().validate().unwrap();
    let from_request = assemble_profile(&validated);

    let info = PersonalInfo {
        activity_level: ActivityLevel::LightlyActive,
        ..person(82.0, 168.0, 44, Gender::Female, Goal::Lose)
    };
    let direct = build_profile(&info, MacroSplit::default(), Climate::Hot);

    assert_eq!(from_request, direct);
}

#[test]
fn test_profile_json_uses_camel_case() {
    let profile = assemble_profile(&request().validate().unwrap());
    let json = serde_json::to_value(&profile).unwrap();

    assert!(json["metrics"]["targetCalories"].is_i64());
    assert!(json["metrics"]["bmiClassification"]["healthRisk"].is_string());
    assert!(json["macronutrients"]["fat"]["saturatedFatLimit"].is_i64());
    assert_eq!(json["personalInfo"]["activityLevel"], "lightlyActive");
}

#[test]
fn test_missing_fields_rejected_before_calculation() {
    let mut incomplete = request();
    incomplete.height = None;
    incomplete.activity_level = Some("  ".to_string());

    match incomplete.validate() {
        Err(NutriError::Validation(msg)) => {
            assert!(msg.contains("height"));
            assert!(msg.contains("activityLevel"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_weight_loss_never_below_floor() {
    for bmi_value in [17.0, 22.0, 27.0, 31.0, 45.0] {
        for tdee_value in [1200.0, 1800.0, 2600.0, 3400.0] {
            let adjustment = adjust_calories(tdee_value, Goal::Lose, bmi_value);
            assert!(adjustment.target_calories >= 0.8 * tdee_value - 1e-9);
            assert!(adjustment.target_calories < tdee_value);
        }
    }
}

#[test]
fn test_zero_fat_percent_falls_back_to_default() {
    let mut zero_fat = request();
    zero_fat.fat_percent = Some(0);

    let profile = assemble_profile(&zero_fat.validate().unwrap());

    assert_eq!(profile.macronutrients.fat.percentage, 30);
    assert_eq!(profile.macronutrients.carbs.percentage, 50);
}
