#[macro_use]
extern crate assert_float_eq;

use diet_plan_calc::NutriError;
use diet_plan_calc::models::{FoodCategory, FoodItem, MealPlan, MealSlot};
use diet_plan_calc::state::{FoodCatalog, FoodQuery};

fn make_food(name: &str, calories: f64, carbs: f64, protein: f64, fat: f64, fiber: f64) -> FoodItem {
    FoodItem {
        id: 0,
        name: name.to_string(),
        category: FoodCategory::Legumes,
        calories,
        carbs,
        protein,
        fat,
        fiber,
        sodium: 0.0,
        potassium: 0.0,
        calcium: 0.0,
        iron: 0.0,
        vitamin_c: 0.0,
        vitamin_a: 0.0,
        omega3: 0.0,
        serving_size: "100g".to_string(),
        notes: None,
        active: true,
    }
}

#[test]
fn test_two_servings_double_calories() {
    let food = make_food("Test Beans", 100.0, 18.0, 7.0, 0.5, 6.0);
    let plan = MealPlan::new(2000.0);

    let (plan, _) = plan.with_food(MealSlot::Lunch, &food, 2.0).unwrap();

    assert_eq!(plan.meal(MealSlot::Lunch).totals().calories, 200);
    assert_eq!(plan.day_totals().calories, 200);
    assert_float_absolute_eq!(plan.day_totals().carbs, 36.0, 1e-9);
    assert_eq!(plan.remaining_calories(), 1800);
}

#[test]
fn test_removing_only_entry_empties_slot() {
    let food = make_food("Test Beans", 100.0, 18.0, 7.0, 0.5, 6.0);
    let (plan, id) = MealPlan::new(2000.0)
        .with_food(MealSlot::Dinner, &food, 2.0)
        .unwrap();

    let plan = plan.without_entry(id);

    assert!(plan.meal(MealSlot::Dinner).entries.is_empty());
    assert_eq!(plan.meal(MealSlot::Dinner).totals().calories, 0);
    assert_eq!(plan.day_totals().calories, 0);
    assert!(plan.is_empty());
}

#[test]
fn test_unknown_entry_removal_is_noop() {
    let food = make_food("Test Beans", 100.0, 18.0, 7.0, 0.5, 6.0);
    let (plan, _) = MealPlan::new(1800.0)
        .with_food(MealSlot::Breakfast, &food, 1.0)
        .unwrap();

    assert_eq!(plan.without_entry(9999), plan);
}

#[test]
fn test_slot_budgets_follow_distribution() {
    let plan = MealPlan::new(2000.0);
    let budgets: Vec<i64> = plan.meals().iter().map(|m| m.target_calories).collect();
    assert_eq!(budgets, vec![500, 700, 600, 200]);
}

#[test]
fn test_day_totals_sum_slot_totals() {
    let catalog = FoodCatalog::seeded();
    let foods = catalog.list_foods(&FoodQuery::default());
    assert!(foods.len() >= 4);

    let mut plan = MealPlan::new(2200.0);
    for (i, food) in foods.iter().take(4).enumerate() {
        let slot = MealSlot::ALL[i % MealSlot::ALL.len()];
        let (next, _) = plan.with_food(slot, food, 1.5).unwrap();
        plan = next;
    }

    let slot_sum: i64 = plan.meals().iter().map(|m| m.totals().calories).sum();
    assert_eq!(plan.day_totals().calories, slot_sum);
    assert_eq!(plan.entry_count(), 4);

    let snapshot = plan.snapshot();
    assert_eq!(snapshot.total_calories, slot_sum);
    assert_eq!(snapshot.target_calories, 2200);
    assert_eq!(snapshot.meals.len(), 4);
}

#[test]
fn test_entry_ids_are_unique() {
    let food = make_food("Test Beans", 100.0, 18.0, 7.0, 0.5, 6.0);
    let (plan, first) = MealPlan::new(2000.0)
        .with_food(MealSlot::Lunch, &food, 1.0)
        .unwrap();
    let (plan, second) = plan.with_food(MealSlot::Lunch, &food, 1.0).unwrap();

    assert_ne!(first, second);
    let plan = plan.without_entry(first);
    assert_eq!(plan.entry_count(), 1);
    assert!(plan.find_entry(second).is_some());
}

#[test]
fn test_non_positive_servings_rejected() {
    let food = make_food("Test Beans", 100.0, 18.0, 7.0, 0.5, 6.0);
    let plan = MealPlan::new(2000.0);

    for servings in [0.0, -1.0, f64::NAN] {
        assert!(matches!(
            plan.with_food(MealSlot::Lunch, &food, servings),
            Err(NutriError::InvalidInput(_))
        ));
    }
}
