mod catalog;
mod persistence;
mod session;

pub use catalog::{
    DEFAULT_LIST_LIMIT, FUZZY_MATCH_THRESHOLD, FoodCatalog, FoodQuery, seed_foods,
};
pub use persistence::{
    CALCULATIONS_FILE, CalculationRecord, DEFAULT_HISTORY_LIMIT, JsonFileStore, MEAL_PLANS_FILE,
    MealPlanRecord, MemoryStore, NutritionStore, load_records, save_records,
};
pub use session::{SESSION_FILE, SessionId};
