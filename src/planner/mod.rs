pub mod builder;
pub mod constants;
pub mod day;
pub mod pool;
pub mod selector;

pub use builder::{build_plan, distinct_subcategories, trim_to_limit, MeatSource, PlanProfile};
pub use constants::*;
pub use day::MealPlanner;
pub use pool::{sample_vegetarian_base, select_pool};
pub use selector::{select_best, select_best_traced, SelectionReport};
