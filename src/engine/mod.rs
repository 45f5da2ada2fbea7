pub mod adjustment;
pub mod assembler;
pub mod constants;
pub mod formulas;
pub mod macros;

pub use adjustment::{CalorieAdjustment, adjust_calories};
pub use assembler::{assemble_profile, build_profile, present_macros, round0, round1};
pub use constants::*;
pub use formulas::{
    RdaTargets, bmi, bmi_classification, bmr, bmr_alternate, fiber_target, ideal_weight_range,
    micronutrient_targets, sodium_target, tdee, water_intake_ml,
};
pub use macros::{MacroShare, MacroTargets, rebalance_macros};
