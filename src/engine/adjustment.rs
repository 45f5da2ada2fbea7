use crate::engine::constants::*;
use crate::models::Goal;

/// Daily calorie target derived from TDEE and the user's goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieAdjustment {
    /// Unrounded kcal/day.
    pub target_calories: f64,
    /// Informational estimate in lb/week.
    pub weekly_weight_change: f64,
    pub safety_note: Option<&'static str>,
}

/// Picks target calories for a goal.
///
/// Losing weight uses a BMI-tiered deficit, then clamps to 80% of TDEE; that
/// floor applies to every tier. People who are not overweight (BMI <= 25) get
/// a safety note when they ask to lose. Gaining uses a BMI-tiered surplus with
/// no clamp.
pub fn adjust_calories(tdee: f64, goal: Goal, bmi: f64) -> CalorieAdjustment {
    match goal {
        Goal::Maintain => CalorieAdjustment {
            target_calories: tdee,
            weekly_weight_change: 0.0,
            safety_note: None,
        },
        Goal::Lose => {
            let (deficit, change) = if bmi > OBESE_BMI {
                DEFICIT_OBESE
            } else if bmi > OVERWEIGHT_BMI {
                DEFICIT_OVERWEIGHT
            } else {
                DEFICIT_NORMAL
            };

            let floor = tdee * MIN_TDEE_FRACTION;
            CalorieAdjustment {
                target_calories: (tdee - deficit).max(floor),
                weekly_weight_change: change,
                safety_note: (bmi <= OVERWEIGHT_BMI).then_some(WEIGHT_LOSS_SAFETY_NOTE),
            }
        }
        Goal::Gain => {
            let (surplus, change) = if bmi < UNDERWEIGHT_BMI {
                SURPLUS_UNDERWEIGHT
            } else {
                SURPLUS_DEFAULT
            };
            CalorieAdjustment {
                target_calories: tdee + surplus,
                weekly_weight_change: change,
                safety_note: None,
            }
        }
    }
}
