use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use diet_plan_calc::cli::{CalculateArgs, Cli, Command};
use diet_plan_calc::config::{AppConfig, log_directive};
use diet_plan_calc::error::{NutriError, Result};
use diet_plan_calc::interface::{
    PlanAction, complete_request, display_categories, display_food_list, display_history,
    display_meal_plan, display_profile, prompt_entry_to_remove, prompt_food, prompt_meal_slot,
    prompt_plan_action, prompt_servings, prompt_target_calories,
};
use diet_plan_calc::models::FoodCategory;
use diet_plan_calc::service::NutritionService;
use diet_plan_calc::state::{FoodQuery, JsonFileStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_directive(verbose))),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::from_cli(&cli);
    debug!(data_dir = %config.data_dir.display(), session = %config.session, "resolved config");

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calculate(args) => cmd_calculate(&config, &args),
        Command::Foods {
            search,
            category,
            limit,
            offset,
        } => cmd_foods(&config, search, category, limit, offset),
        Command::Categories => cmd_categories(&config),
        Command::History { limit } => cmd_history(&config, limit),
        Command::Plan { calories } => cmd_plan(&config, calories),
    }
}

fn service(config: &AppConfig) -> NutritionService<JsonFileStore> {
    NutritionService::new(config.store(), config.session.clone())
}

/// Calculate a nutrition profile and record it in the session history.
fn cmd_calculate(config: &AppConfig, args: &CalculateArgs) -> Result<()> {
    let mut request = args.to_request();
    if args.interactive {
        request = complete_request(request)?;
    }

    let profile = service(config).calculate(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        display_profile(&profile);
    }

    Ok(())
}

/// List catalog foods matching an optional search and category.
fn cmd_foods(
    config: &AppConfig,
    search: Option<String>,
    category: Option<String>,
    limit: usize,
    offset: usize,
) -> Result<()> {
    let category = match category {
        Some(label) => Some(FoodCategory::from_label(&label).ok_or_else(|| {
            NutriError::InvalidInput(format!("Unknown food category: {}", label))
        })?),
        None => None,
    };

    let catalog = config.load_catalog()?;
    let foods = catalog.list_foods(&FoodQuery {
        search,
        category,
        limit,
        offset,
    });

    display_food_list(&foods, "Foods");
    Ok(())
}

fn cmd_categories(config: &AppConfig) -> Result<()> {
    let catalog = config.load_catalog()?;
    display_categories(&catalog.categories());
    Ok(())
}

fn cmd_history(config: &AppConfig, limit: usize) -> Result<()> {
    let records = service(config).history(limit)?;
    display_history(&records);
    Ok(())
}

/// Build a meal plan interactively, then save and show it.
fn cmd_plan(config: &AppConfig, calories: Option<f64>) -> Result<()> {
    let catalog = config.load_catalog()?;
    if catalog.is_empty() {
        println!("The food catalog is empty.");
        return Ok(());
    }

    let service = service(config);

    let target = match calories {
        Some(calories) if calories.is_finite() && calories > 0.0 => calories,
        Some(calories) => {
            return Err(NutriError::InvalidInput(format!(
                "Calorie target must be greater than 0, got {}",
                calories
            )));
        }
        None => match service.latest_target_calories() {
            Ok(Some(latest)) => {
                println!("Using target from your latest calculation: {} kcal", latest);
                latest as f64
            }
            Ok(None) => prompt_target_calories()?,
            Err(e) => {
                warn!(error = %e, "could not read calculation history");
                prompt_target_calories()?
            }
        },
    };

    let mut plan = service.start_meal_plan(target);
    display_meal_plan(&plan);

    loop {
        match prompt_plan_action(&plan)? {
            PlanAction::AddFood => {
                let slot = prompt_meal_slot()?;
                let Some(food) = prompt_food(&catalog)? else {
                    continue;
                };
                let servings = match prompt_servings() {
                    Ok(servings) => servings,
                    Err(NutriError::InvalidInput(msg)) => {
                        println!("{}", msg);
                        continue;
                    }
                    Err(e) => return Err(e),
                };
                let (next, _) = plan.with_food(slot, food, servings)?;
                plan = next;
                println!("Added {} to {}.", food.name, slot);
            }
            PlanAction::RemoveFood => {
                if let Some(id) = prompt_entry_to_remove(&plan)? {
                    plan = plan.without_entry(id);
                }
            }
            PlanAction::Finish => break,
        }
        display_meal_plan(&plan);
    }

    service.save_meal_plan(&plan);
    println!("Meal plan saved ({} entries).", plan.entry_count());

    Ok(())
}
