use crate::catalog::rules::{contains_any, in_set, ClassificationRules};
use crate::error::{PlannerError, Result};
use crate::models::{DietFlags, FoodItem, RawFoodRecord};

/// Validate a raw catalog row and attach its diet flags.
pub fn classify(raw: &RawFoodRecord, rules: &ClassificationRules) -> Result<FoodItem> {
    let name = raw.food.trim();
    if name.is_empty() {
        return Err(PlannerError::MissingField("Food"));
    }

    let subcategory = raw.subcategory.trim();
    if subcategory.is_empty() {
        return Err(PlannerError::MissingField("Subcategory"));
    }

    let calories = raw.parse_calories()?;

    Ok(FoodItem {
        name: name.to_string(),
        subcategory: subcategory.to_string(),
        serving: raw.serving.trim().to_string(),
        calories,
        flags: classify_flags(subcategory, name, rules),
    })
}

/// Compute all four diet flags for a subcategory and food name.
pub fn classify_flags(subcategory: &str, name: &str, rules: &ClassificationRules) -> DietFlags {
    let lowered = name.to_lowercase();

    let vegetarian = is_vegetarian(subcategory, &lowered, rules);
    let vegan = vegetarian && is_vegan(subcategory, &lowered, rules);
    let seafood = is_seafood(subcategory, &lowered, rules);
    let non_vegetarian =
        !vegetarian && !seafood && is_meat(subcategory, &lowered, rules);

    DietFlags {
        vegetarian,
        vegan,
        seafood,
        non_vegetarian,
    }
}

/// Anything that matches no meat rule counts as vegetarian.
fn is_vegetarian(subcategory: &str, name: &str, rules: &ClassificationRules) -> bool {
    if in_set(&rules.non_vegetarian_subcategories, subcategory) {
        return false;
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    if rules
        .meat_keywords
        .iter()
        .any(|keyword| words.contains(&keyword.as_str()))
    {
        return false;
    }

    // Short keywords like "ham" or "cod" only count as whole words.
    if rules
        .meat_keywords
        .iter()
        .any(|keyword| keyword.chars().count() > 3 && name.contains(keyword.as_str()))
    {
        return false;
    }

    if contains_any(&rules.non_vegetarian_dishes, name) {
        return false;
    }

    if (name.contains("pizza") || subcategory == "Pizza")
        && contains_any(&rules.pizza_meat_toppings, name)
    {
        return false;
    }

    true
}

/// Unmatched vegetarian foods are presumed non-vegan.
fn is_vegan(subcategory: &str, name: &str, rules: &ClassificationRules) -> bool {
    if in_set(&rules.vegan_subcategories, subcategory) {
        return !contains_any(&rules.animal_derivative_keywords, name);
    }

    if in_set(&rules.non_vegan_subcategories, subcategory) {
        return false;
    }

    if contains_any(&rules.non_vegan_keywords, name) {
        return false;
    }

    contains_any(&rules.known_vegan_foods, name)
}

fn is_seafood(subcategory: &str, name: &str, rules: &ClassificationRules) -> bool {
    in_set(&rules.seafood_subcategories, subcategory) || contains_any(&rules.seafood_keywords, name)
}

fn is_meat(subcategory: &str, name: &str, rules: &ClassificationRules) -> bool {
    in_set(&rules.meat_subcategories, subcategory)
        || contains_any(&rules.non_vegetarian_meat_keywords, name)
}
