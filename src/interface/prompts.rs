use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{DietType, MealPlanSet};

/// Parse a calorie target typed by the user.
pub fn parse_target(input: &str) -> Result<u32> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| PlannerError::InvalidInput(format!("invalid calorie target: {}", input)))
}

/// Prompt for the daily calorie target.
pub fn prompt_target_calories() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("What is your daily calorie target?")
        .default("2000".to_string())
        .interact_text()?;

    parse_target(&input)
}

/// Prompt for which generated plan to keep as a favourite.
///
/// Returns `None` if the user picks nothing.
pub fn prompt_plan_to_save(plans: &MealPlanSet) -> Result<Option<DietType>> {
    let options: Vec<DietType> = plans
        .iter()
        .filter(|(_, plan)| !plan.is_empty())
        .map(|(diet, _)| *diet)
        .collect();

    if options.is_empty() {
        return Ok(None);
    }

    let mut labels: Vec<String> = options.iter().map(|d| d.label().to_string()).collect();
    labels.push("None".to_string());

    let selection = Select::new()
        .with_prompt("Which plan would you like to save?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options.get(selection).copied())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(" 2000 ").unwrap(), 2000);
        assert_eq!(parse_target("0").unwrap(), 0);
        assert!(parse_target("-100").is_err());
        assert!(parse_target("lots").is_err());
    }
}
