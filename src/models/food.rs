use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// One row of the food catalog CSV, before classification.
///
/// Calories arrive as text such as `"350 kcal"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFoodRecord {
    #[serde(rename = "Subcategory")]
    pub subcategory: String,

    #[serde(rename = "Food")]
    pub food: String,

    #[serde(rename = "Serving", default)]
    pub serving: String,

    #[serde(rename = "Calories")]
    pub calories: String,
}

impl RawFoodRecord {
    pub fn new(subcategory: &str, food: &str, serving: &str, calories: &str) -> Self {
        Self {
            subcategory: subcategory.to_string(),
            food: food.to_string(),
            serving: serving.to_string(),
            calories: calories.to_string(),
        }
    }

    /// Numeric calorie value taken from the first token of the field.
    pub fn parse_calories(&self) -> Result<u32> {
        parse_calories(&self.food, &self.calories)
    }
}

/// Extract the leading integer from a calorie field like `"1,200 kcal"`.
pub fn parse_calories(food: &str, raw: &str) -> Result<u32> {
    let invalid = || PlannerError::InvalidCalories {
        food: food.to_string(),
        value: raw.to_string(),
    };

    let token = raw.split_whitespace().next().ok_or_else(invalid)?;
    token.replace(',', "").parse::<u32>().map_err(|_| invalid())
}

/// Diet-category flags assigned at classification time.
///
/// Vegan implies vegetarian. Seafood and non-vegetarian never overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DietFlags {
    pub vegetarian: bool,
    pub vegan: bool,
    pub seafood: bool,
    pub non_vegetarian: bool,
}

/// A classified catalog entry. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub subcategory: String,
    pub serving: String,
    pub calories: u32,
    pub flags: DietFlags,
}

impl FoodItem {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Vegetarian but not vegan; used to round out meat and seafood plans.
    #[inline]
    pub fn is_vegetarian_base(&self) -> bool {
        self.flags.vegetarian && !self.flags.vegan
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): {} kcal, veg:{} vegan:{} sea:{} meat:{}",
            self.name,
            self.subcategory,
            self.calories,
            self.flags.vegetarian,
            self.flags.vegan,
            self.flags.seafood,
            self.flags.non_vegetarian
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calories_with_unit() {
        assert_eq!(parse_calories("Apple", "95 kcal").unwrap(), 95);
        assert_eq!(parse_calories("Apple", "  52 cal").unwrap(), 52);
        assert_eq!(parse_calories("Pie", "1,200 kcal").unwrap(), 1200);
        assert_eq!(parse_calories("Water", "0").unwrap(), 0);
    }

    #[test]
    fn test_parse_calories_rejects_garbage() {
        assert!(matches!(
            parse_calories("Apple", "lots kcal"),
            Err(PlannerError::InvalidCalories { .. })
        ));
        assert!(parse_calories("Apple", "").is_err());
        assert!(parse_calories("Apple", "-5 kcal").is_err());
        assert!(parse_calories("Apple", "52.5 kcal").is_err());
    }

    #[test]
    fn test_vegetarian_base() {
        let mut item = FoodItem {
            name: "Cheddar".to_string(),
            subcategory: "Cheese".to_string(),
            serving: "1 slice".to_string(),
            calories: 113,
            flags: DietFlags {
                vegetarian: true,
                ..Default::default()
            },
        };
        assert!(item.is_vegetarian_base());

        item.flags.vegan = true;
        assert!(!item.is_vegetarian_base());
    }
}
