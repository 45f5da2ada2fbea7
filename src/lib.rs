pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod service;
pub mod state;

pub use config::AppConfig;
pub use error::{NutriError, Result};
pub use models::{CalculationRequest, FoodItem, MealPlan, NutritionProfile, PersonalInfo};
pub use service::NutritionService;
