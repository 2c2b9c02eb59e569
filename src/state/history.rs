use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{DietType, MealPlan, MealPlanRequest, MealPlanSet};

/// A stored plan: either automatic history or a user-saved favourite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPlan {
    pub id: u64,
    pub date: NaiveDate,
    pub diet_type: DietType,
    pub target_calories: u32,
    pub actual_calories: u32,
    pub foods: Vec<String>,
    #[serde(default)]
    pub is_saved: bool,
}

/// JSON-file backed list of stored plans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanHistory {
    next_id: u64,
    entries: Vec<SavedPlan>,
}

impl PlanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load history from a JSON file; a missing file is an empty history.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)?;
        let mut history: PlanHistory = serde_json::from_str(&content)?;

        // Keep ids unique even if the file was edited by hand.
        let max_id = history.entries.iter().map(|e| e.id).max().unwrap_or(0);
        history.next_id = history.next_id.max(max_id + 1);
        Ok(history)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Append one entry and return its id.
    pub fn add(
        &mut self,
        date: NaiveDate,
        diet_type: DietType,
        request: &MealPlanRequest,
        plan: &MealPlan,
        is_saved: bool,
    ) -> u64 {
        self.next_id = self.next_id.max(1);
        let id = self.next_id;
        self.next_id += 1;

        self.entries.push(SavedPlan {
            id,
            date,
            diet_type,
            target_calories: request.target_calories,
            actual_calories: plan.total_calories,
            foods: plan.food_names(),
            is_saved,
        });
        id
    }

    /// Record every non-empty plan of a set as history.
    pub fn record(
        &mut self,
        date: NaiveDate,
        request: &MealPlanRequest,
        plans: &MealPlanSet,
    ) -> Vec<u64> {
        plans
            .iter()
            .filter(|(_, plan)| !plan.is_empty())
            .map(|(diet, plan)| self.add(date, *diet, request, plan, false))
            .collect()
    }

    /// Store one diet type's plan from a set as a favourite.
    pub fn save_plan(
        &mut self,
        date: NaiveDate,
        request: &MealPlanRequest,
        plans: &MealPlanSet,
        diet_type: DietType,
    ) -> Result<u64> {
        let plan = plans
            .get(&diet_type)
            .filter(|plan| !plan.is_empty())
            .ok_or_else(|| {
                PlannerError::InvalidInput(format!("no {} plan to save", diet_type))
            })?;
        Ok(self.add(date, diet_type, request, plan, true))
    }

    pub fn delete(&mut self, id: u64) -> Result<SavedPlan> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(PlannerError::PlanNotFound(id))?;
        Ok(self.entries.remove(idx))
    }

    pub fn entries(&self) -> &[SavedPlan] {
        &self.entries
    }

    /// Favourites only.
    pub fn saved(&self) -> Vec<&SavedPlan> {
        self.entries.iter().filter(|e| e.is_saved).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
