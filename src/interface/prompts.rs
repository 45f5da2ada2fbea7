use dialoguer::{Confirm, Input, Select};

use crate::error::{NutriError, Result};
use crate::models::{
    ActivityLevel, CalculationRequest, Climate, FoodItem, Goal, MealPlan, MealSlot, MAX_AGE,
    MIN_AGE,
};
use crate::state::{FoodCatalog, FoodQuery};

/// Most candidates offered in a food selection list.
const MAX_FOOD_CHOICES: usize = 8;

/// Parse a strictly positive, finite number.
pub fn parse_positive(input: &str, what: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput(format!("{} must be a number", what)))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "{} must be greater than 0",
            what
        )));
    }

    Ok(value)
}

fn prompt_positive(prompt: &str, what: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;
    parse_positive(&input, what)
}

fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!("Age in years ({}-{})", MIN_AGE, MAX_AGE))
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Age must be a whole number".to_string()))
}

fn prompt_percent(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Percent must be a whole number".to_string()))
}

fn select_label(prompt: &str, labels: &[&str], default: usize) -> Result<String> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(default)
        .interact()?;
    Ok(labels[selection].to_string())
}

/// Ask for every field the request is still missing.
///
/// Fields already present are kept as given. Climate and the macro split are
/// only asked about when nothing was supplied for them.
pub fn complete_request(mut request: CalculationRequest) -> Result<CalculationRequest> {
    if request.weight.is_none() {
        request.weight = Some(prompt_positive("Weight in kg", "Weight")?);
    }
    if request.height.is_none() {
        request.height = Some(prompt_positive("Height in cm", "Height")?);
    }
    if request.age.is_none() {
        request.age = Some(prompt_age()?);
    }
    if is_blank(&request.gender) {
        request.gender = Some(select_label("Gender", &["male", "female"], 0)?);
    }
    if is_blank(&request.activity_level) {
        let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.as_str()).collect();
        request.activity_level = Some(select_label("Activity level", &labels, 0)?);
    }
    if is_blank(&request.goal) {
        let labels: Vec<String> = Goal::ALL.iter().map(|g| g.to_string()).collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        request.goal = Some(select_label("Goal", &labels, 1)?);
    }
    if is_blank(&request.climate) {
        let labels: Vec<String> = Climate::ALL.iter().map(|c| c.to_string()).collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        request.climate = Some(select_label("Climate", &labels, 1)?);
    }

    let split_given = request.carb_percent.is_some()
        || request.protein_percent.is_some()
        || request.fat_percent.is_some();
    if !split_given && prompt_yes_no("Customise the macro split (default 50/20/30)?", false)? {
        request.carb_percent = Some(prompt_percent("Carbohydrate %", 50)?);
        request.protein_percent = Some(prompt_percent("Protein %", 20)?);
        request.fat_percent = Some(prompt_percent("Fat %", 30)?);
    }

    Ok(request)
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// Prompt for the daily calorie target of a new plan.
pub fn prompt_target_calories() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Daily calorie target")
        .default("2000".to_string())
        .interact_text()?;
    parse_positive(&input, "Calorie target")
}

pub fn prompt_meal_slot() -> Result<MealSlot> {
    let labels: Vec<&str> = MealSlot::ALL.iter().map(|s| s.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Which meal?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(MealSlot::ALL[selection])
}

/// Prompt for a food by name.
///
/// An exact name wins outright. Otherwise substring matches are offered,
/// then similar names. Returns `None` when the user picks nothing.
pub fn prompt_food(catalog: &FoodCatalog) -> Result<Option<&FoodItem>> {
    let input: String = Input::new()
        .with_prompt("Food name (or part of it)")
        .interact_text()?;
    let input = input.trim();

    if input.is_empty() {
        return Ok(None);
    }

    if let Some(food) = catalog.find_by_name(input) {
        return Ok(Some(food));
    }

    let mut candidates = catalog.list_foods(&FoodQuery {
        search: Some(input.to_string()),
        limit: MAX_FOOD_CHOICES,
        ..Default::default()
    });

    if candidates.is_empty() {
        candidates = catalog
            .fuzzy_matches(input)
            .into_iter()
            .take(MAX_FOOD_CHOICES)
            .map(|(food, _)| food)
            .collect();
    }

    if candidates.is_empty() {
        println!("No matching food found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(food));
    }

    let mut options: Vec<String> = candidates
        .iter()
        .map(|f| format!("{} ({}, {} kcal / {})", f.name, f.category, f.calories, f.serving_size))
        .collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(candidates.get(selection).copied())
}

pub fn prompt_servings() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Servings")
        .default("1".to_string())
        .interact_text()?;
    parse_positive(&input, "Servings")
}

/// Next step in the interactive planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    AddFood,
    RemoveFood,
    Finish,
}

pub fn prompt_plan_action(plan: &MealPlan) -> Result<PlanAction> {
    let mut actions = vec![(PlanAction::AddFood, "Add a food")];
    if !plan.is_empty() {
        actions.push((PlanAction::RemoveFood, "Remove a food"));
    }
    actions.push((PlanAction::Finish, "Finish and save"));

    let labels: Vec<&str> = actions.iter().map(|(_, label)| *label).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection].0)
}

/// Pick an entry to remove. `None` means the user backed out.
pub fn prompt_entry_to_remove(plan: &MealPlan) -> Result<Option<u64>> {
    let entries: Vec<(MealSlot, u64, String)> = plan
        .meals()
        .iter()
        .flat_map(|meal| {
            meal.entries.iter().map(move |e| {
                (
                    meal.slot,
                    e.id,
                    format!(
                        "{}: {} x{} ({} kcal)",
                        meal.slot, e.food_name, e.serving_multiplier, e.totals.calories
                    ),
                )
            })
        })
        .collect();

    if entries.is_empty() {
        return Ok(None);
    }

    let mut labels: Vec<&str> = entries.iter().map(|(_, _, label)| label.as_str()).collect();
    labels.push("Cancel");

    let selection = Select::new()
        .with_prompt("Remove which entry?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(entries.get(selection).map(|(_, id, _)| *id))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
