use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::FoodItem;
use crate::planner::constants::BOUND_TOLERANCE;

/// The four plan categories, always produced together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DietType {
    #[serde(rename = "Vegetarian")]
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    #[serde(rename = "Seafood Mix")]
    SeafoodMix,
    #[serde(rename = "Vegan")]
    Vegan,
}

impl DietType {
    pub const ALL: [DietType; 4] = [
        DietType::Vegetarian,
        DietType::NonVegetarian,
        DietType::SeafoodMix,
        DietType::Vegan,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DietType::Vegetarian => "Vegetarian",
            DietType::NonVegetarian => "Non-Vegetarian",
            DietType::SeafoodMix => "Seafood Mix",
            DietType::Vegan => "Vegan",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DietType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "vegetarian" | "veg" => Ok(DietType::Vegetarian),
            "nonvegetarian" | "nonveg" | "meat" => Ok(DietType::NonVegetarian),
            "seafoodmix" | "seafood" => Ok(DietType::SeafoodMix),
            "vegan" => Ok(DietType::Vegan),
            _ => Err(PlannerError::InvalidInput(format!("unknown diet type: {}", s))),
        }
    }
}

/// A target calorie count with its derived acceptance band.
///
/// The band is informational; the builder only aims at `target_calories`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanRequest {
    pub target_calories: u32,
    pub min_calories: u32,
    pub max_calories: u32,
}

impl MealPlanRequest {
    pub fn new(target_calories: u32) -> Self {
        Self::with_tolerance(target_calories, BOUND_TOLERANCE)
    }

    pub fn with_tolerance(target_calories: u32, tolerance: f64) -> Self {
        let target = f64::from(target_calories);
        Self {
            target_calories,
            min_calories: (target * (1.0 - tolerance)) as u32,
            max_calories: (target * (1.0 + tolerance)) as u32,
        }
    }

    pub fn within_bounds(&self, calories: u32) -> bool {
        (self.min_calories..=self.max_calories).contains(&calories)
    }
}

/// A selected food, detached from the catalog so plans outlive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub subcategory: String,
    pub food: String,
    pub serving: String,
    pub calories: u32,
}

impl From<&FoodItem> for PlanItem {
    fn from(item: &FoodItem) -> Self {
        Self {
            subcategory: item.subcategory.clone(),
            food: item.name.clone(),
            serving: item.serving.clone(),
            calories: item.calories,
        }
    }
}

/// Up to four plan items with their summed calories.
///
/// The total saturates at `u32::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    pub foods: Vec<PlanItem>,
    pub total_calories: u32,
}

impl MealPlan {
    pub fn new(foods: Vec<PlanItem>) -> Self {
        let total_calories = foods
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.calories));
        Self {
            foods,
            total_calories,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Absolute distance between the plan total and a target.
    pub fn deviation(&self, target: u32) -> u32 {
        self.total_calories.abs_diff(target)
    }

    pub fn contains(&self, food: &str) -> bool {
        self.foods.iter().any(|item| item.food == food)
    }

    pub fn food_names(&self) -> Vec<String> {
        self.foods.iter().map(|item| item.food.clone()).collect()
    }
}

/// One plan per diet type, in [`DietType::ALL`] order.
pub type MealPlanSet = BTreeMap<DietType, MealPlan>;
