use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{NutriError, Result};

/// Youngest age the formulas are applied to.
pub const MIN_AGE: u32 = 10;

/// Oldest age the formulas are applied to.
pub const MAX_AGE: u32 = 120;

/// Lowercases a label and strips `_`, `-` and spaces, so `lightly_active`,
/// `Lightly Active` and `lightlyActive` all compare equal.
fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Maps a free-form label onto a gender.
    ///
    /// Only "male" (case-insensitive) selects the male branch. Every other
    /// label, including typos, resolves to `Female`.
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            other => {
                warn!(label = other, "unrecognised gender, using female formulas");
                Gender::Female
            }
        }
    }

    pub fn is_male(self) -> bool {
        self == Gender::Male
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Desk job, no exercise.
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week.
    LightlyActive,
    /// Moderate exercise 3-5 days/week.
    ModeratelyActive,
    /// Hard exercise 6-7 days/week.
    VeryActive,
    /// Physical job or training twice a day.
    SuperActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::SuperActive,
    ];

    /// Maps a label onto an activity level; unknown labels fall back to `Sedentary`.
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "lightlyactive" => ActivityLevel::LightlyActive,
            "moderatelyactive" => ActivityLevel::ModeratelyActive,
            "veryactive" => ActivityLevel::VeryActive,
            "superactive" => ActivityLevel::SuperActive,
            other => {
                warn!(label = other, "unrecognised activity level, using sedentary");
                ActivityLevel::Sedentary
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightlyActive",
            ActivityLevel::ModeratelyActive => "moderatelyActive",
            ActivityLevel::VeryActive => "veryActive",
            ActivityLevel::SuperActive => "superActive",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];

    /// Maps a label onto a goal; unknown labels fall back to `Maintain`.
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "lose" => Goal::Lose,
            "maintain" => Goal::Maintain,
            "gain" => Goal::Gain,
            other => {
                warn!(label = other, "unrecognised goal, using maintain");
                Goal::Maintain
            }
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Lose => write!(f, "lose"),
            Goal::Maintain => write!(f, "maintain"),
            Goal::Gain => write!(f, "gain"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Climate {
    Cold,
    #[default]
    Temperate,
    Hot,
    Tropical,
}

impl Climate {
    pub const ALL: [Climate; 4] = [
        Climate::Cold,
        Climate::Temperate,
        Climate::Hot,
        Climate::Tropical,
    ];

    /// Maps a label onto a climate; unknown labels fall back to `Temperate`.
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "cold" => Climate::Cold,
            "temperate" => Climate::Temperate,
            "hot" => Climate::Hot,
            "tropical" => Climate::Tropical,
            other => {
                warn!(label = other, "unrecognised climate, using temperate");
                Climate::Temperate
            }
        }
    }
}

impl fmt::Display for Climate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Climate::Cold => write!(f, "cold"),
            Climate::Temperate => write!(f, "temperate"),
            Climate::Hot => write!(f, "hot"),
            Climate::Tropical => write!(f, "tropical"),
        }
    }
}

/// Requested macronutrient split in whole percent.
///
/// The engine does not require the three values to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSplit {
    pub carb_percent: u32,
    pub protein_percent: u32,
    pub fat_percent: u32,
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self {
            carb_percent: 50,
            protein_percent: 20,
            fat_percent: 30,
        }
    }
}

/// Validated biometric inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    /// Body weight in kilograms.
    pub weight: f64,
    /// Height in centimeters.
    pub height: f64,
    /// Age in years.
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

/// Raw calculation input as it arrives from the command line or a JSON body.
///
/// Enum-like fields stay as strings until [`CalculationRequest::validate`]
/// maps them through the `from_label` functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
    pub carb_percent: Option<u32>,
    pub protein_percent: Option<u32>,
    pub fat_percent: Option<u32>,
    pub climate: Option<String>,
}

/// A request that passed validation and is ready for the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedRequest {
    pub personal: PersonalInfo,
    pub split: MacroSplit,
    pub climate: Climate,
}

impl CalculationRequest {
    /// Names of required fields that are absent.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.weight.is_none() {
            missing.push("weight");
        }
        if self.height.is_none() {
            missing.push("height");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if self.gender.as_deref().is_none_or(|g| g.trim().is_empty()) {
            missing.push("gender");
        }
        if self
            .activity_level
            .as_deref()
            .is_none_or(|a| a.trim().is_empty())
        {
            missing.push("activityLevel");
        }
        missing
    }

    /// Checks presence and numeric bounds, then resolves every label to its enum.
    pub fn validate(&self) -> Result<ValidatedRequest> {
        let missing = self.missing_fields();
        let missing_error = || {
            NutriError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ))
        };
        if !missing.is_empty() {
            return Err(missing_error());
        }

        let (Some(weight), Some(height), Some(age), Some(gender), Some(activity)) = (
            self.weight,
            self.height,
            self.age,
            self.gender.as_deref(),
            self.activity_level.as_deref(),
        ) else {
            return Err(missing_error());
        };

        if !weight.is_finite() || weight <= 0.0 {
            return Err(NutriError::Validation(format!(
                "weight must be a positive number of kilograms, got {}",
                weight
            )));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(NutriError::Validation(format!(
                "height must be a positive number of centimeters, got {}",
                height
            )));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(NutriError::Validation(format!(
                "age must be between {} and {}, got {}",
                MIN_AGE, MAX_AGE, age
            )));
        }

        // Zero counts as "not given".
        let percent_or = |value: Option<u32>, default: u32| {
            value.filter(|&p| p > 0).unwrap_or(default)
        };
        let defaults = MacroSplit::default();
        let split = MacroSplit {
            carb_percent: percent_or(self.carb_percent, defaults.carb_percent),
            protein_percent: percent_or(self.protein_percent, defaults.protein_percent),
            fat_percent: percent_or(self.fat_percent, defaults.fat_percent),
        };

        Ok(ValidatedRequest {
            personal: PersonalInfo {
                weight,
                height,
                age,
                gender: Gender::from_label(gender),
                activity_level: ActivityLevel::from_label(activity),
                goal: self.goal.as_deref().map(Goal::from_label).unwrap_or_default(),
            },
            split,
            climate: self
                .climate
                .as_deref()
                .map(Climate::from_label)
                .unwrap_or_default(),
        })
    }
}
