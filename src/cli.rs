use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Calorie Buddy: daily meal plans matched to a calorie target for four diet types.
#[derive(Parser, Debug)]
#[command(name = "calorie_buddy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV.
    #[arg(short, long, default_value = "calories.csv")]
    pub catalog: PathBuf,

    /// Optional planner config JSON (attempts, tolerance, meat ratios).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Optional classification rules JSON.
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Path to the plan history JSON file.
    #[arg(long, default_value = "meal_history.json")]
    pub history: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one plan per diet type for a calorie target.
    Plan {
        /// Daily calorie target (prompted for when omitted).
        #[arg(short, long)]
        target: Option<u32>,

        /// Seed for reproducible plans.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the plans as JSON instead of tables.
        #[arg(long)]
        json: bool,

        /// Pick a plan to keep as a favourite.
        #[arg(long)]
        save: bool,
    },

    /// Show how a food is classified.
    Inspect {
        /// Food name (case-insensitive, fuzzy suggestions on a miss).
        name: String,
    },

    /// Show catalog statistics per diet flag.
    Summary,

    /// List or delete stored plans.
    History {
        /// Only show saved favourites.
        #[arg(long)]
        saved: bool,

        /// Delete the plan with this id.
        #[arg(long)]
        delete: Option<u64>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            target: None,
            seed: None,
            json: false,
            save: false,
        }
    }
}
