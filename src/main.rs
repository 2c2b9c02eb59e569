use std::path::Path;

use chrono::Local;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use calorie_buddy_rs::catalog::{ClassificationRules, FoodCatalog};
use calorie_buddy_rs::cli::{Cli, Command};
use calorie_buddy_rs::config::PlannerConfig;
use calorie_buddy_rs::error::Result;
use calorie_buddy_rs::interface::{
    display_food, display_history, display_plan_set, display_summary, prompt_plan_to_save,
    prompt_target_calories, prompt_yes_no,
};
use calorie_buddy_rs::planner::MealPlanner;
use calorie_buddy_rs::state::PlanHistory;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so JSON output on stdout stays clean.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            target,
            seed,
            json,
            save,
        } => {
            let catalog = load_catalog(&cli.catalog, cli.rules.as_deref())?;
            let config = load_config(cli.config.as_deref())?;
            cmd_plan(&catalog, config, &cli.history, target, seed, json, save)
        }
        Command::Inspect { name } => {
            let catalog = load_catalog(&cli.catalog, cli.rules.as_deref())?;
            cmd_inspect(&catalog, &name)
        }
        Command::Summary => {
            let catalog = load_catalog(&cli.catalog, cli.rules.as_deref())?;
            display_summary(&catalog, &catalog.summary());
            Ok(())
        }
        Command::History { saved, delete } => cmd_history(&cli.history, saved, delete),
    }
}

fn load_catalog(path: &Path, rules_path: Option<&Path>) -> Result<FoodCatalog> {
    let rules = match rules_path {
        Some(p) => ClassificationRules::load(p)?,
        None => ClassificationRules::default(),
    };
    FoodCatalog::load(path, &rules)
}

fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    match path {
        Some(p) => PlannerConfig::load(p),
        None => Ok(PlannerConfig::default()),
    }
}

/// Generate plans for all four diet types and record them.
fn cmd_plan(
    catalog: &FoodCatalog,
    config: PlannerConfig,
    history_path: &Path,
    target: Option<u32>,
    seed: Option<u64>,
    json: bool,
    save: bool,
) -> Result<()> {
    if catalog.is_empty() {
        println!("The food catalog is empty; nothing to plan with.");
        return Ok(());
    }

    let target = match target {
        Some(t) => t,
        None => prompt_target_calories()?,
    };
    if target == 0 {
        warn!("target of 0 kcal; every plan will be empty");
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let planner = MealPlanner::new(catalog, config);
    let request = planner.request(target);
    let plans = planner.plan_day(&request, &mut rng);

    if json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
    } else {
        display_plan_set(&plans, &request);
    }

    let today = Local::now().date_naive();
    let mut history = PlanHistory::load(history_path)?;
    let ids = history.record(today, &request, &plans);
    debug!(recorded = ids.len(), "recorded plans in history");

    if save {
        if let Some(diet) = prompt_plan_to_save(&plans)? {
            let id = history.save_plan(today, &request, &plans, diet)?;
            println!("Saved {} meal plan as #{}.", diet, id);
        }
    }

    history.save(history_path)?;
    Ok(())
}

/// Show classification flags for a food, with suggestions on a miss.
fn cmd_inspect(catalog: &FoodCatalog, name: &str) -> Result<()> {
    if let Some(item) = catalog.find(name) {
        display_food(item);
        return Ok(());
    }

    let suggestions = catalog.fuzzy_find(name, 5);
    if suggestions.is_empty() {
        println!("No matching food found for '{}'", name);
        return Ok(());
    }

    if suggestions.len() == 1 {
        let item = suggestions[0];
        if prompt_yes_no(&format!("Did you mean '{}'?", item.name), true)? {
            display_food(item);
        }
        return Ok(());
    }

    println!("No exact match for '{}'. Did you mean:", name);
    for item in suggestions {
        println!("  {}", item.name);
    }
    Ok(())
}

/// List stored plans or delete one.
fn cmd_history(path: &Path, saved_only: bool, delete: Option<u64>) -> Result<()> {
    let mut history = PlanHistory::load(path)?;

    if let Some(id) = delete {
        let removed = history.delete(id)?;
        history.save(path)?;
        println!("Deleted {} plan #{} from {}.", removed.diet_type, removed.id, removed.date);
        return Ok(());
    }

    if saved_only {
        display_history(&history.saved(), "Saved Plans");
    } else {
        let all: Vec<_> = history.entries().iter().collect();
        display_history(&all, "Plan History");
    }

    Ok(())
}
