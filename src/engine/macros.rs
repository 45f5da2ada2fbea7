use crate::engine::constants::*;
use crate::models::MacroSplit;

/// One macronutrient's share of the day, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MacroShare {
    pub percent: f64,
    pub calories: f64,
    pub grams: f64,
}

impl MacroShare {
    fn new(target_calories: f64, percent: f64, kcal_per_gram: f64) -> Self {
        let calories = target_calories * percent / 100.0;
        Self {
            percent,
            calories,
            grams: calories / kcal_per_gram,
        }
    }
}

/// Rebalanced macronutrient targets before presentation rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroTargets {
    pub carbs: MacroShare,
    pub protein: MacroShare,
    pub fat: MacroShare,
    pub recommended_protein_grams: f64,
    pub recommended_protein_calories: f64,
    pub min_protein_percent: f64,
    pub saturated_fat_grams: f64,
}

/// Splits target calories into carbohydrate, protein and fat.
///
/// The requested split is only a starting point:
/// 1. protein is raised to at least `max(15%, 0.8 g/kg of body weight)`,
/// 2. fat is capped at 30%,
/// 3. carbohydrate takes whatever is left over.
///
/// Carbohydrate is not clamped. When the protein floor and fat cap add up to
/// more than 100% the carbohydrate share comes out negative.
pub fn rebalance_macros(
    target_calories: f64,
    requested: MacroSplit,
    body_weight_kg: Option<f64>,
) -> MacroTargets {
    let weight = body_weight_kg.unwrap_or(DEFAULT_BODY_WEIGHT_KG);

    let recommended_protein_grams = weight * PROTEIN_GRAMS_PER_KG;
    let recommended_protein_calories = recommended_protein_grams * KCAL_PER_GRAM_PROTEIN;

    // Non-positive targets only come from degenerate BMR inputs; keep the
    // percentage floor finite for them.
    let min_protein_percent = if target_calories > 0.0 {
        MIN_PROTEIN_PERCENT.max(recommended_protein_calories / target_calories * 100.0)
    } else {
        MIN_PROTEIN_PERCENT
    };

    let protein_percent = (requested.protein_percent as f64).max(min_protein_percent);
    let fat_percent = (requested.fat_percent as f64).min(MAX_FAT_PERCENT);
    let carb_percent = 100.0 - protein_percent - fat_percent;

    MacroTargets {
        carbs: MacroShare::new(target_calories, carb_percent, KCAL_PER_GRAM_CARB),
        protein: MacroShare::new(target_calories, protein_percent, KCAL_PER_GRAM_PROTEIN),
        fat: MacroShare::new(target_calories, fat_percent, KCAL_PER_GRAM_FAT),
        recommended_protein_grams,
        recommended_protein_calories,
        min_protein_percent,
        saturated_fat_grams: target_calories * SATURATED_FAT_FRACTION / KCAL_PER_GRAM_FAT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(carb: u32, protein: u32, fat: u32) -> MacroSplit {
        MacroSplit {
            carb_percent: carb,
            protein_percent: protein,
            fat_percent: fat,
        }
    }

    #[test]
    fn test_requested_split_kept_when_within_limits() {
        let macros = rebalance_macros(1750.0, MacroSplit::default(), Some(70.0));
        assert!((macros.recommended_protein_grams - 56.0).abs() < 1e-9);
        assert!((macros.recommended_protein_calories - 224.0).abs() < 1e-9);
        assert!((macros.min_protein_percent - 15.0).abs() < 1e-9);
        assert!((macros.protein.percent - 20.0).abs() < 1e-9);
        assert!((macros.fat.percent - 30.0).abs() < 1e-9);
        assert!((macros.carbs.percent - 50.0).abs() < 1e-9);
        assert!((macros.carbs.grams - 218.75).abs() < 1e-9);
        assert!((macros.protein.grams - 87.5).abs() < 1e-9);
        assert!((macros.fat.grams - 525.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_protein_floor_from_body_weight() {
        // 120 kg -> 96 g -> 384 kcal -> 25.6% of 1500
        let macros = rebalance_macros(1500.0, split(60, 10, 30), Some(120.0));
        assert!((macros.min_protein_percent - 25.6).abs() < 1e-9);
        assert!((macros.protein.percent - 25.6).abs() < 1e-9);
        assert!((macros.carbs.percent - 44.4).abs() < 1e-9);
    }

    #[test]
    fn test_protein_floor_never_below_fifteen() {
        let macros = rebalance_macros(3000.0, split(85, 5, 10), Some(50.0));
        assert!((macros.protein.percent - 15.0).abs() < 1e-9);
        assert!((macros.carbs.percent - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_fat_ceiling() {
        let macros = rebalance_macros(2000.0, split(20, 20, 60), Some(60.0));
        assert!((macros.fat.percent - 30.0).abs() < 1e-9);
        assert!((macros.carbs.percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_body_weight() {
        let with_default = rebalance_macros(2000.0, MacroSplit::default(), None);
        let explicit = rebalance_macros(2000.0, MacroSplit::default(), Some(70.0));
        assert_eq!(with_default, explicit);
    }

    #[test]
    fn test_saturated_fat_limit() {
        let macros = rebalance_macros(1800.0, MacroSplit::default(), Some(70.0));
        assert!((macros.saturated_fat_grams - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_carbs_can_go_negative() {
        // 150 kg on 600 kcal: 120 g protein = 480 kcal = 80%, fat capped at 30%.
        let macros = rebalance_macros(600.0, split(50, 20, 30), Some(150.0));
        assert!((macros.protein.percent - 80.0).abs() < 1e-9);
        assert!((macros.carbs.percent - (-10.0)).abs() < 1e-9);
        assert!(macros.carbs.grams < 0.0);
    }

    #[test]
    fn test_non_positive_target_stays_finite() {
        let macros = rebalance_macros(0.0, MacroSplit::default(), Some(70.0));
        assert!((macros.protein.percent - 20.0).abs() < 1e-9);
        assert!(macros.carbs.percent.is_finite());
    }
}
