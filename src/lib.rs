pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use catalog::{ClassificationRules, FoodCatalog};
pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use models::{DietType, FoodItem, MealPlan, MealPlanRequest, MealPlanSet, PlanItem};
pub use planner::MealPlanner;
