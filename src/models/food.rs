use std::fmt;

use serde::{Deserialize, Serialize};

/// Food groups the catalog recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FoodCategory {
    #[serde(rename = "Whole Grains")]
    WholeGrains,
    #[serde(rename = "Lean Protein")]
    LeanProtein,
    #[serde(rename = "Vegetables")]
    Vegetables,
    #[serde(rename = "Starchy Vegetables")]
    StarchyVegetables,
    #[serde(rename = "Fatty Fish")]
    FattyFish,
    #[serde(rename = "Dairy")]
    Dairy,
    #[serde(rename = "Healthy Fats")]
    HealthyFats,
    #[serde(rename = "Leafy Greens")]
    LeafyGreens,
    #[serde(rename = "Legumes")]
    Legumes,
    #[serde(rename = "Fruits")]
    Fruits,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 10] = [
        FoodCategory::WholeGrains,
        FoodCategory::LeanProtein,
        FoodCategory::Vegetables,
        FoodCategory::StarchyVegetables,
        FoodCategory::FattyFish,
        FoodCategory::Dairy,
        FoodCategory::HealthyFats,
        FoodCategory::LeafyGreens,
        FoodCategory::Legumes,
        FoodCategory::Fruits,
    ];

    /// Case-insensitive lookup by display name.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FoodCategory::WholeGrains => "Whole Grains",
            FoodCategory::LeanProtein => "Lean Protein",
            FoodCategory::Vegetables => "Vegetables",
            FoodCategory::StarchyVegetables => "Starchy Vegetables",
            FoodCategory::FattyFish => "Fatty Fish",
            FoodCategory::Dairy => "Dairy",
            FoodCategory::HealthyFats => "Healthy Fats",
            FoodCategory::LeafyGreens => "Leafy Greens",
            FoodCategory::Legumes => "Legumes",
            FoodCategory::Fruits => "Fruits",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_serving_size() -> String {
    "100g".to_string()
}

fn default_active() -> bool {
    true
}

/// A catalog food with nutrient amounts per serving.
///
/// Flat on purpose so the same struct reads from JSON and CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Catalog-assigned identifier; 0 until the catalog numbers the item.
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub category: FoodCategory,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    /// mg
    #[serde(default)]
    pub sodium: f64,
    /// mg
    #[serde(default)]
    pub potassium: f64,
    /// mg
    #[serde(default)]
    pub calcium: f64,
    /// mg
    #[serde(default)]
    pub iron: f64,
    /// mg
    #[serde(default)]
    pub vitamin_c: f64,
    /// µg
    #[serde(default)]
    pub vitamin_a: f64,
    /// g
    #[serde(default)]
    pub omega3: f64,
    #[serde(default = "default_serving_size")]
    pub serving_size: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl FoodItem {
    /// Basic validation: a name and non-negative nutrient values.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && [
                self.calories,
                self.carbs,
                self.protein,
                self.fat,
                self.fiber,
                self.sodium,
                self.potassium,
                self.calcium,
                self.iron,
                self.vitamin_c,
                self.vitamin_a,
                self.omega3,
            ]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Case-insensitive substring match against name or category.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.category.as_str().to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodItem {
        FoodItem {
            id: 1,
            name: "Brown Rice (cooked)".to_string(),
            category: FoodCategory::WholeGrains,
            calories: 111.0,
            carbs: 23.0,
            protein: 2.6,
            fat: 0.9,
            fiber: 1.8,
            sodium: 5.0,
            potassium: 43.0,
            calcium: 10.0,
            iron: 0.4,
            vitamin_c: 0.0,
            vitamin_a: 0.0,
            omega3: 0.0,
            serving_size: "100g".to_string(),
            notes: None,
            active: true,
        }
    }

    #[test]
    fn test_is_valid() {
        let food = sample_food();
        assert!(food.is_valid());

        let mut invalid = sample_food();
        invalid.fat = -1.0;
        assert!(!invalid.is_valid());

        let mut unnamed = sample_food();
        unnamed.name = " ".to_string();
        assert!(!unnamed.is_valid());
    }

    #[test]
    fn test_matches_search_name_or_category() {
        let food = sample_food();
        assert!(food.matches_search("rice"));
        assert!(food.matches_search("GRAINS"));
        assert!(!food.matches_search("salmon"));
    }

    #[test]
    fn test_category_from_label() {
        assert_eq!(
            FoodCategory::from_label("leafy greens"),
            Some(FoodCategory::LeafyGreens)
        );
        assert_eq!(FoodCategory::from_label("Candy"), None);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let json = r#"{"name": "Avocado", "category": "Healthy Fats", "calories": 160,
            "carbs": 9, "protein": 2, "fat": 15}"#;
        let food: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(food.category, FoodCategory::HealthyFats);
        assert_eq!(food.serving_size, "100g");
        assert!(food.active);
        assert_eq!(food.fiber, 0.0);
        assert_eq!(food.id, 0);
    }
}
