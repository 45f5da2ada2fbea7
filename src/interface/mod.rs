pub mod prompts;
pub mod render;

pub use prompts::{
    PlanAction, complete_request, parse_positive, prompt_entry_to_remove, prompt_food,
    prompt_meal_slot, prompt_plan_action, prompt_servings, prompt_target_calories, prompt_yes_no,
};
pub use render::{
    display_categories, display_food_list, display_history, display_meal_plan,
    display_nutrition_tips, display_profile,
};
