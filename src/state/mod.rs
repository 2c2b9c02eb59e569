mod history;

pub use history::{PlanHistory, SavedPlan};
