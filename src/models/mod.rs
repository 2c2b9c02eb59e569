pub mod food;
pub mod plan;

pub use food::{DietFlags, FoodItem, RawFoodRecord};
pub use plan::{DietType, MealPlan, MealPlanRequest, MealPlanSet, PlanItem};
