use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::engine::{round0, round1};
use crate::error::{NutriError, Result};
use crate::models::FoodItem;

/// The four fixed meals of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    /// Share of the day's target calories allotted to this meal.
    pub fn calorie_share(self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::Lunch => 0.35,
            MealSlot::Dinner => 0.30,
            MealSlot::Snacks => 0.10,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snacks",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "breakfast" => Some(MealSlot::Breakfast),
            "lunch" => Some(MealSlot::Lunch),
            "dinner" => Some(MealSlot::Dinner),
            "snack" | "snacks" => Some(MealSlot::Snacks),
            _ => None,
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Energy and macronutrient totals. Calories are whole kcal, the rest grams.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: i64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl NutrientTotals {
    /// Gram values rounded to one decimal, for storage and display.
    pub fn rounded(self) -> Self {
        Self {
            calories: self.calories,
            carbs: round1(self.carbs),
            protein: round1(self.protein),
            fat: round1(self.fat),
            fiber: round1(self.fiber),
        }
    }
}

impl Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, other: NutrientTotals) -> NutrientTotals {
        NutrientTotals {
            calories: self.calories + other.calories,
            carbs: self.carbs + other.carbs,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
        }
    }
}

impl Sum for NutrientTotals {
    fn sum<I: Iterator<Item = NutrientTotals>>(iter: I) -> Self {
        iter.fold(NutrientTotals::default(), Add::add)
    }
}

/// One food line in a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub id: u64,
    pub food_id: u32,
    pub food_name: String,
    pub serving_multiplier: f64,
    pub totals: NutrientTotals,
}

impl MealEntry {
    fn new(id: u64, food: &FoodItem, serving_multiplier: f64) -> Self {
        Self {
            id,
            food_id: food.id,
            food_name: food.name.clone(),
            serving_multiplier,
            totals: NutrientTotals {
                calories: round0(food.calories * serving_multiplier),
                carbs: round1(food.carbs * serving_multiplier),
                protein: round1(food.protein * serving_multiplier),
                fat: round1(food.fat * serving_multiplier),
                fiber: round1(food.fiber * serving_multiplier),
            },
        }
    }
}

/// A meal slot with its calorie budget and entries, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub slot: MealSlot,
    pub target_calories: i64,
    pub entries: Vec<MealEntry>,
}

impl Meal {
    /// Recomputed from the entries on every call.
    pub fn totals(&self) -> NutrientTotals {
        self.entries.iter().map(|e| e.totals).sum()
    }

    pub fn remaining_calories(&self) -> i64 {
        self.target_calories - self.totals().calories
    }
}

/// A day of four meals built against a calorie target.
///
/// Values are immutable: adding or removing food returns a new plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub target_calories: i64,
    meals: Vec<Meal>,
    next_entry_id: u64,
}

impl MealPlan {
    pub fn new(target_calories: f64) -> Self {
        let meals = MealSlot::ALL
            .iter()
            .map(|&slot| Meal {
                slot,
                target_calories: round0(target_calories * slot.calorie_share()),
                entries: Vec::new(),
            })
            .collect();

        Self {
            target_calories: round0(target_calories),
            meals,
            next_entry_id: 1,
        }
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn meal(&self, slot: MealSlot) -> &Meal {
        // `new` creates the slots in `MealSlot::ALL` order.
        &self.meals[slot as usize]
    }

    /// Returns a plan with `food` appended to `slot`, plus the new entry's id.
    pub fn with_food(
        &self,
        slot: MealSlot,
        food: &FoodItem,
        serving_multiplier: f64,
    ) -> Result<(MealPlan, u64)> {
        if !serving_multiplier.is_finite() || serving_multiplier <= 0.0 {
            return Err(NutriError::InvalidInput(format!(
                "serving multiplier must be positive, got {}",
                serving_multiplier
            )));
        }

        let id = self.next_entry_id;
        let mut next = self.clone();
        next.meals[slot as usize]
            .entries
            .push(MealEntry::new(id, food, serving_multiplier));
        next.next_entry_id += 1;
        Ok((next, id))
    }

    /// Returns a plan without the given entry. Unknown ids leave the plan unchanged.
    pub fn without_entry(&self, entry_id: u64) -> MealPlan {
        let mut next = self.clone();
        for meal in &mut next.meals {
            meal.entries.retain(|e| e.id != entry_id);
        }
        next
    }

    pub fn find_entry(&self, entry_id: u64) -> Option<(MealSlot, &MealEntry)> {
        self.meals.iter().find_map(|meal| {
            meal.entries
                .iter()
                .find(|e| e.id == entry_id)
                .map(|e| (meal.slot, e))
        })
    }

    /// Sum over all meals, recomputed on every call.
    pub fn day_totals(&self) -> NutrientTotals {
        self.meals.iter().map(Meal::totals).sum()
    }

    pub fn remaining_calories(&self) -> i64 {
        self.target_calories - self.day_totals().calories
    }

    pub fn entry_count(&self) -> usize {
        self.meals.iter().map(|m| m.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Storable copy of the plan with its totals.
    pub fn snapshot(&self) -> MealPlanSnapshot {
        let totals = self.day_totals().rounded();
        MealPlanSnapshot {
            target_calories: self.target_calories,
            meals: self.meals.clone(),
            total_calories: totals.calories,
            total_macros: totals,
        }
    }
}

/// What the store keeps for a meal plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanSnapshot {
    pub target_calories: i64,
    pub meals: Vec<Meal>,
    pub total_calories: i64,
    pub total_macros: NutrientTotals,
}
