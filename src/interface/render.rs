use crate::engine::MEAL_PLAN_TIPS;
use crate::models::{FoodCategory, FoodItem, MealPlan, NutritionProfile};
use crate::state::CalculationRecord;

/// Display a full nutrition profile as a plain-text report.
pub fn display_profile(profile: &NutritionProfile) {
    let info = &profile.personal_info;
    let m = &profile.metrics;

    println!();
    println!("=== Nutrition Profile ===");
    println!();
    println!(
        "{} kg, {} cm, {} years, {}, {}, goal: {}",
        info.weight, info.height, info.age, info.gender, info.activity_level, info.goal
    );
    println!();

    println!("--- Body ---");
    println!(
        "BMI: {:.1} ({}) - {}",
        m.bmi, m.bmi_classification.category, m.bmi_classification.health_risk
    );
    println!("  {}", m.bmi_classification.recommendation);
    println!(
        "Ideal weight: {:.1} - {:.1} kg",
        m.ideal_weight.min, m.ideal_weight.max
    );
    println!();

    println!("--- Energy ---");
    println!("BMR: {} kcal (Harris-Benedict: {} kcal)", m.bmr, m.bmr_alternate);
    println!("TDEE: {} kcal", m.tdee);
    let sign = if m.weekly_weight_change > 0.0 { "+" } else { "" };
    println!(
        "Target: {} kcal ({}{} lb/week)",
        m.target_calories, sign, m.weekly_weight_change
    );
    if let Some(note) = &m.safety_note {
        println!("  Note: {}", note);
    }
    println!(
        "Water: {} ml (about {} glasses)",
        m.water_intake, m.water_glasses
    );
    println!();

    let macros = &profile.macronutrients;
    println!("--- Macronutrients ---");
    println!(
        "Carbs:   {:>4} g {:>5} kcal {:>3}%",
        macros.carbs.grams, macros.carbs.calories, macros.carbs.percentage
    );
    println!(
        "Protein: {:>4} g {:>5} kcal {:>3}%  ({})",
        macros.protein.grams, macros.protein.calories, macros.protein.percentage, macros.protein.note
    );
    println!(
        "Fat:     {:>4} g {:>5} kcal {:>3}%  (saturated < {} g)",
        macros.fat.grams, macros.fat.calories, macros.fat.percentage, macros.fat.saturated_fat_limit
    );
    println!("  {}", macros.fat.note);
    println!();

    let micro = &profile.micronutrients;
    println!("--- Micronutrients ---");
    println!("Fiber: {} g", micro.fiber);
    println!(
        "Sodium: < {} mg (salt < {} g)",
        micro.sodium.sodium_mg, micro.sodium.salt_grams
    );
    println!(
        "Vitamin C: {} mg, Vitamin D: {} µg",
        micro.vitamins.vitamin_c, micro.vitamins.vitamin_d
    );
    println!(
        "Calcium: {} mg, Iron: {} mg, Potassium: {} mg",
        micro.minerals.calcium, micro.minerals.iron, micro.minerals.potassium
    );
    println!();

    let rec = &profile.recommendations;
    println!("--- Recommendations ---");
    println!("Fruit & vegetables: {}", rec.daily_fruit_veg);
    println!("Free sugars: {}", rec.free_sugars);
    println!("Physical activity: {}", rec.physical_activity);
    println!("{}", rec.note);
    println!();
}

/// Display a meal plan slot by slot, followed by day totals and tips.
pub fn display_meal_plan(plan: &MealPlan) {
    println!();
    println!("=== Meal Plan ({} kcal) ===", plan.target_calories);

    for meal in plan.meals() {
        let totals = meal.totals();
        println!();
        println!(
            "{} - {} / {} kcal",
            meal.slot, totals.calories, meal.target_calories
        );

        if meal.entries.is_empty() {
            println!("  (empty)");
            continue;
        }

        let width = meal
            .entries
            .iter()
            .map(|e| e.food_name.len())
            .max()
            .unwrap_or(10);

        for entry in &meal.entries {
            println!(
                "  #{:<3} {:<width$} x{:<4} {:>4} kcal | C:{} P:{} F:{} Fib:{}",
                entry.id,
                entry.food_name,
                entry.serving_multiplier,
                entry.totals.calories,
                entry.totals.carbs,
                entry.totals.protein,
                entry.totals.fat,
                entry.totals.fiber,
                width = width
            );
        }
    }

    let day = plan.day_totals().rounded();
    println!();
    println!("--- Day Totals ---");
    println!(
        "Calories: {} / {} ({} remaining)",
        day.calories,
        plan.target_calories,
        plan.remaining_calories()
    );
    println!(
        "Carbs: {} g, Protein: {} g, Fat: {} g, Fiber: {} g",
        day.carbs, day.protein, day.fat, day.fiber
    );
    println!();
    display_nutrition_tips();
}

pub fn display_nutrition_tips() {
    println!("--- Tips ---");
    for tip in MEAL_PLAN_TIPS {
        println!("  * {}", tip);
    }
    println!();
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {:>3}. {} [{}] - {} cal per {}, C:{} P:{} F:{} Fib:{}",
            food.id,
            food.name,
            food.category,
            food.calories,
            food.serving_size,
            food.carbs,
            food.protein,
            food.fat,
            food.fiber
        );
        if let Some(notes) = &food.notes {
            println!("       {}", notes);
        }
    }

    println!();
}

pub fn display_categories(categories: &[FoodCategory]) {
    if categories.is_empty() {
        println!("No food categories.");
        return;
    }
    for category in categories {
        println!("{}", category);
    }
}

/// Display past calculations, most recent first.
pub fn display_history(records: &[CalculationRecord]) {
    if records.is_empty() {
        println!("No calculations saved for this session yet.");
        return;
    }

    println!();
    println!("=== Calculation History ({}) ===", records.len());
    println!();

    for record in records {
        let info = &record.personal_info;
        let r = &record.results;
        println!(
            "{}  {} kg, {} cm, {} y, goal {} -> BMI {:.1}, TDEE {}, target {} kcal",
            record.created_at.format("%Y-%m-%d %H:%M"),
            info.weight,
            info.height,
            info.age,
            info.goal,
            r.bmi,
            r.tdee,
            r.target_calories
        );
    }

    println!();
}
