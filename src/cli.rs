use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::CalculationRequest;
use crate::state::{DEFAULT_HISTORY_LIMIT, DEFAULT_LIST_LIMIT};

/// Diet Plan Calculator: nutrition targets and daily meal planning.
#[derive(Parser, Debug)]
#[command(name = "diet_plan_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory for calculation history, meal plans and the session token.
    #[arg(short, long, default_value = "nutri_data", global = true)]
    pub data_dir: PathBuf,

    /// Food catalog file (.json or .csv). Defaults to the built-in catalog.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Session token; defaults to the one stored in the data directory.
    #[arg(long, global = true)]
    pub session: Option<String>,

    /// Log at info level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Inputs for a nutrition calculation.
#[derive(Args, Debug, Clone, Default)]
pub struct CalculateArgs {
    /// Body weight in kg.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<f64>,

    /// Age in years (10-120).
    #[arg(long)]
    pub age: Option<u32>,

    /// male or female.
    #[arg(long)]
    pub gender: Option<String>,

    /// sedentary, lightlyActive, moderatelyActive, veryActive or superActive.
    #[arg(long)]
    pub activity: Option<String>,

    /// lose, maintain or gain.
    #[arg(long)]
    pub goal: Option<String>,

    /// Requested carbohydrate share in percent.
    #[arg(long)]
    pub carb: Option<u32>,

    /// Requested protein share in percent.
    #[arg(long)]
    pub protein: Option<u32>,

    /// Requested fat share in percent.
    #[arg(long)]
    pub fat: Option<u32>,

    /// cold, temperate, hot or tropical.
    #[arg(long)]
    pub climate: Option<String>,

    /// Print the profile as JSON instead of a report.
    #[arg(long)]
    pub json: bool,

    /// Prompt for any missing inputs.
    #[arg(short, long)]
    pub interactive: bool,
}

impl CalculateArgs {
    pub fn to_request(&self) -> CalculationRequest {
        CalculationRequest {
            weight: self.weight,
            height: self.height,
            age: self.age,
            gender: self.gender.clone(),
            activity_level: self.activity.clone(),
            goal: self.goal.clone(),
            carb_percent: self.carb,
            protein_percent: self.protein,
            fat_percent: self.fat,
            climate: self.climate.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate BMI, energy needs and nutrient targets.
    Calculate(CalculateArgs),

    /// List foods in the catalog.
    Foods {
        /// Match against food name or category.
        #[arg(short, long)]
        search: Option<String>,

        /// Only foods in this category, e.g. "Whole Grains".
        #[arg(short, long)]
        category: Option<String>,

        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,

        #[arg(long, default_value_t = 0)]
        offset: usize,
    },

    /// List food categories.
    Categories,

    /// Show past calculations for this session.
    History {
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },

    /// Build a daily meal plan interactively.
    Plan {
        /// Daily calorie target. Defaults to the latest calculation.
        #[arg(long)]
        calories: Option<f64>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Calculate(CalculateArgs {
            interactive: true,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calculate_flags() {
        let cli = Cli::parse_from([
            "diet_plan_calc",
            "calculate",
            "--weight",
            "70",
            "--height",
            "175",
            "--age",
            "30",
            "--gender",
            "male",
            "--activity",
            "veryActive",
            "--fat",
            "25",
        ]);
        let Some(Command::Calculate(args)) = cli.command else {
            panic!("expected calculate");
        };
        let request = args.to_request();
        assert_eq!(request.weight, Some(70.0));
        assert_eq!(request.activity_level.as_deref(), Some("veryActive"));
        assert_eq!(request.fat_percent, Some(25));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["diet_plan_calc", "history", "--data-dir", "/tmp/x", "--limit", "3"]);
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/x"));
        assert!(matches!(cli.command, Some(Command::History { limit: 3 })));
    }

    #[test]
    fn test_default_command_is_interactive_calculate() {
        match Command::default() {
            Command::Calculate(args) => assert!(args.interactive),
            other => panic!("unexpected default {:?}", other),
        }
    }
}
