use rand::Rng;
use tracing::info;

use crate::catalog::FoodCatalog;
use crate::config::PlannerConfig;
use crate::models::{DietType, MealPlanRequest, MealPlanSet};
use crate::planner::builder::{MeatSource, PlanProfile};
use crate::planner::pool::select_pool;
use crate::planner::selector::select_best;

/// Produces the four diet-type plans for a request against a shared catalog.
pub struct MealPlanner<'a> {
    catalog: &'a FoodCatalog,
    config: PlannerConfig,
}

impl<'a> MealPlanner<'a> {
    pub fn new(catalog: &'a FoodCatalog, config: PlannerConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Request for `target` with the configured bound band.
    pub fn request(&self, target: u32) -> MealPlanRequest {
        MealPlanRequest::with_tolerance(target, self.config.bound_tolerance)
    }

    /// Calorie split for a diet type.
    pub fn profile(&self, diet: DietType) -> PlanProfile {
        match diet {
            DietType::Vegetarian | DietType::Vegan => PlanProfile::variety(),
            DietType::NonVegetarian => PlanProfile::with_meat(
                self.config.non_vegetarian_meat_ratio,
                MeatSource::NonVegetarian,
            ),
            DietType::SeafoodMix => {
                PlanProfile::with_meat(self.config.seafood_meat_ratio, MeatSource::Seafood)
            }
        }
    }

    /// Best plan for every diet type, in [`DietType::ALL`] order.
    ///
    /// A diet type whose pool is too sparse maps to an empty plan.
    pub fn plan_day<R: Rng + ?Sized>(&self, request: &MealPlanRequest, rng: &mut R) -> MealPlanSet {
        let target = request.target_calories;
        let mut plans = MealPlanSet::new();

        for diet in DietType::ALL {
            let pool = select_pool(self.catalog, diet, self.config.base_sample_fraction, rng);
            let plan = select_best(
                &pool,
                target,
                &self.profile(diet),
                self.config.attempts,
                self.config.tolerance,
                rng,
            );

            info!(
                diet = %diet,
                target,
                total = plan.total_calories,
                items = plan.len(),
                "selected plan"
            );
            plans.insert(diet, plan);
        }

        plans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ClassificationRules;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CSV: &str = "\
Subcategory,Food,Serving,Calories
Poultry,Chicken Breast,100 g,165 kcal
Beef & Veal,Beef Steak,100 g,271 kcal
Fish & Seafood,Salmon,100 g,208 kcal
Fish & Seafood,Shrimp,100 g,99 kcal
Fruit,Apple,1 medium,95 kcal
Fruit,Banana,1 medium,105 kcal
Vegetables & Legumes,Lentils,1 cup,230 kcal
Nuts & Seeds,Almonds,1 oz,164 kcal
Grains,Brown Rice,1 cup,215 kcal
Cheese,Cheddar,1 oz,113 kcal
Dairy,Greek Yogurt,1 cup,130 kcal
Eggs,Boiled Egg,1 large,78 kcal
Breakfast Cereals,Granola,1/2 cup,300 kcal
";

    fn catalog() -> FoodCatalog {
        FoodCatalog::from_reader(CSV.as_bytes(), &ClassificationRules::default()).unwrap()
    }

    #[test]
    fn test_plan_day_covers_all_diet_types() {
        let catalog = catalog();
        let planner = MealPlanner::new(&catalog, PlannerConfig::default());
        let mut rng = StdRng::seed_from_u64(42);

        let plans = planner.plan_day(&planner.request(800), &mut rng);
        let keys: Vec<DietType> = plans.keys().copied().collect();
        assert_eq!(keys, DietType::ALL.to_vec());
    }

    #[test]
    fn test_plans_respect_diet_flags() {
        let catalog = catalog();
        let planner = MealPlanner::new(&catalog, PlannerConfig::default());
        let mut rng = StdRng::seed_from_u64(9);

        let plans = planner.plan_day(&planner.request(900), &mut rng);

        for item in &plans[&DietType::Vegan].foods {
            assert!(catalog.find(&item.food).unwrap().flags.vegan, "{}", item.food);
        }
        for item in &plans[&DietType::Vegetarian].foods {
            assert!(catalog.find(&item.food).unwrap().flags.vegetarian, "{}", item.food);
        }
        for item in &plans[&DietType::SeafoodMix].foods {
            let flags = catalog.find(&item.food).unwrap().flags;
            assert!(!flags.non_vegetarian && !flags.vegan, "{}", item.food);
        }
        for item in &plans[&DietType::NonVegetarian].foods {
            let flags = catalog.find(&item.food).unwrap().flags;
            assert!(!flags.seafood && !flags.vegan, "{}", item.food);
        }
    }

    #[test]
    fn test_profiles_follow_config() {
        let catalog = catalog();
        let config = PlannerConfig {
            seafood_meat_ratio: 0.5,
            ..Default::default()
        };
        let planner = MealPlanner::new(&catalog, config);

        assert_eq!(planner.profile(DietType::Vegan).meat_ratio, 0.0);
        assert_eq!(planner.profile(DietType::SeafoodMix).meat_ratio, 0.5);
        assert_eq!(
            planner.profile(DietType::NonVegetarian).meat_source,
            MeatSource::NonVegetarian
        );
    }
}
