pub mod prompts;
pub mod render;

pub use prompts::{parse_target, prompt_plan_to_save, prompt_target_calories, prompt_yes_no};
pub use render::{display_food, display_history, display_plan_set, display_summary};
