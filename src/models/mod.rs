pub mod food;
pub mod personal;
pub mod plan;
pub mod profile;

pub use food::{FoodCategory, FoodItem};
pub use personal::{
    ActivityLevel, CalculationRequest, Climate, Gender, Goal, MAX_AGE, MIN_AGE, MacroSplit,
    PersonalInfo, ValidatedRequest,
};
pub use plan::{Meal, MealEntry, MealPlan, MealPlanSnapshot, MealSlot, NutrientTotals};
pub use profile::{
    BmiClassification, CarbTarget, FatTarget, IdealWeightRange, MacronutrientBreakdown,
    Metrics, MicronutrientTargets, MineralTargets, NutritionProfile, ProteinTarget,
    Recommendations, ResultsSummary, SodiumTarget, VitaminTargets,
};
