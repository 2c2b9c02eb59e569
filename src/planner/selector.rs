use rand::Rng;
use tracing::debug;

use crate::models::{FoodItem, MealPlan};
use crate::planner::builder::{build_plan, PlanProfile};

/// Outcome of a best-of-N run, including every attempt in order.
#[derive(Debug, Clone, Default)]
pub struct SelectionReport {
    pub best: MealPlan,
    pub attempts: Vec<MealPlan>,
}

impl SelectionReport {
    /// Whether the best plan landed inside the tolerance band.
    pub fn within_tolerance(&self, target: u32, tolerance: f64) -> bool {
        !self.best.is_empty() && f64::from(self.best.deviation(target)) <= f64::from(target) * tolerance
    }
}

/// Run the builder up to `attempts` times and keep the closest plan.
///
/// Empty attempts never replace a found plan. Stops as soon as a plan lands
/// within `target * tolerance`.
pub fn select_best<R: Rng + ?Sized>(
    pool: &[&FoodItem],
    target: u32,
    profile: &PlanProfile,
    attempts: usize,
    tolerance: f64,
    rng: &mut R,
) -> MealPlan {
    select_best_traced(pool, target, profile, attempts, tolerance, rng).best
}

pub fn select_best_traced<R: Rng + ?Sized>(
    pool: &[&FoodItem],
    target: u32,
    profile: &PlanProfile,
    attempts: usize,
    tolerance: f64,
    rng: &mut R,
) -> SelectionReport {
    let mut report = SelectionReport::default();
    let mut best_deviation: Option<u32> = None;
    let band = f64::from(target) * tolerance;

    for attempt in 0..attempts {
        let plan = build_plan(pool, target, profile, rng);
        report.attempts.push(plan.clone());

        if plan.is_empty() {
            debug!(attempt, "empty plan");
            continue;
        }

        let deviation = plan.deviation(target);
        debug!(attempt, total = plan.total_calories, deviation, "built plan");

        if best_deviation.is_none_or(|best| deviation < best) {
            best_deviation = Some(deviation);
            report.best = plan;

            if f64::from(deviation) <= band {
                break;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DietFlags;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn food(name: &str, subcategory: &str, calories: u32) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            subcategory: subcategory.to_string(),
            serving: "1 serving".to_string(),
            calories,
            flags: DietFlags {
                vegetarian: true,
                ..Default::default()
            },
        }
    }

    fn sample_pool() -> Vec<FoodItem> {
        vec![
            food("Apple", "Fruit", 95),
            food("Banana", "Fruit", 105),
            food("Brown Rice", "Grains", 215),
            food("Oatmeal", "Grains", 150),
            food("Lentil Soup", "Soups", 230),
            food("Tomato Soup", "Soups", 160),
            food("Hummus", "Spreads", 170),
            food("Peanut Butter", "Spreads", 190),
        ]
    }

    #[test]
    fn test_best_is_no_worse_than_any_attempt() {
        let items = sample_pool();
        let pool: Vec<&FoodItem> = items.iter().collect();

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let report =
                select_best_traced(&pool, 700, &PlanProfile::variety(), 5, 0.0, &mut rng);

            assert_eq!(report.attempts.len(), 5);
            let best = report.best.deviation(700);
            for attempt in report.attempts.iter().filter(|p| !p.is_empty()) {
                assert!(best <= attempt.deviation(700));
            }
        }
    }

    #[test]
    fn test_stops_early_within_tolerance() {
        let items = sample_pool();
        let pool: Vec<&FoodItem> = items.iter().collect();
        let mut rng = StdRng::seed_from_u64(7);

        // Every non-empty plan is within a 100% band.
        let report = select_best_traced(&pool, 700, &PlanProfile::variety(), 5, 1.0, &mut rng);
        assert_eq!(report.attempts.len(), 1);
        assert!(report.within_tolerance(700, 1.0));
    }

    #[test]
    fn test_sparse_pool_returns_empty_plan() {
        let items = vec![food("Apple", "Fruit", 95), food("Rice", "Grains", 215)];
        let pool: Vec<&FoodItem> = items.iter().collect();
        let mut rng = StdRng::seed_from_u64(1);

        let plan = select_best(&pool, 2000, &PlanProfile::variety(), 5, 0.05, &mut rng);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_zero_attempts() {
        let items = sample_pool();
        let pool: Vec<&FoodItem> = items.iter().collect();
        let mut rng = StdRng::seed_from_u64(1);

        let report = select_best_traced(&pool, 700, &PlanProfile::variety(), 0, 0.05, &mut rng);
        assert!(report.best.is_empty());
        assert!(report.attempts.is_empty());
    }
}
