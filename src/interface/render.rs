use crate::catalog::{CatalogSummary, FoodCatalog};
use crate::models::{FoodItem, MealPlanRequest, MealPlanSet};
use crate::state::SavedPlan;

/// Display the four diet-type plans in formatted tables.
pub fn display_plan_set(plans: &MealPlanSet, request: &MealPlanRequest) {
    println!();
    println!(
        "=== Meal Plans for {} kcal (acceptable {}-{}) ===",
        request.target_calories, request.min_calories, request.max_calories
    );

    for (diet, plan) in plans {
        println!();
        println!("--- {} ---", diet);

        if plan.is_empty() {
            println!("No plan could be generated (not enough variety in this category).");
            continue;
        }

        // Find max food name length for alignment
        let max_name_len = plan.foods.iter().map(|p| p.food.len()).max().unwrap_or(10);

        for (i, item) in plan.foods.iter().enumerate() {
            println!(
                "{:>3}. {:<width$} - {:>4} kcal | {} ({})",
                i + 1,
                item.food,
                item.calories,
                item.serving,
                item.subcategory,
                width = max_name_len
            );
        }

        let deviation = i64::from(plan.total_calories) - i64::from(request.target_calories);
        let sign = if deviation >= 0 { "+" } else { "" };
        let marker = if request.within_bounds(plan.total_calories) {
            ""
        } else {
            "  (outside range)"
        };
        println!(
            "     Total: {} kcal ({}{}){}",
            plan.total_calories, sign, deviation, marker
        );
    }

    println!();
}

/// Display one catalog item with its diet flags.
pub fn display_food(item: &FoodItem) {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    println!();
    println!("=== {} ===", item.name);
    println!("  Subcategory:    {}", item.subcategory);
    println!("  Serving:        {}", item.serving);
    println!("  Calories:       {} kcal", item.calories);
    println!("  Vegetarian:     {}", yes_no(item.flags.vegetarian));
    println!("  Vegan:          {}", yes_no(item.flags.vegan));
    println!("  Seafood:        {}", yes_no(item.flags.seafood));
    println!("  Non-vegetarian: {}", yes_no(item.flags.non_vegetarian));
    println!();
}

/// Display catalog statistics.
pub fn display_summary(catalog: &FoodCatalog, summary: &CatalogSummary) {
    println!();
    println!("=== Catalog (rules v{}) ===", catalog.rules_version());
    println!("  Items:          {}", summary.total);
    println!("  Subcategories:  {}", summary.subcategories);
    println!("  Vegetarian:     {}", summary.vegetarian);
    println!("  Vegan:          {}", summary.vegan);
    println!("  Seafood:        {}", summary.seafood);
    println!("  Non-vegetarian: {}", summary.non_vegetarian);
    println!();
}

/// Display stored plans, newest first.
pub fn display_history(entries: &[&SavedPlan], title: &str) {
    if entries.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} plans) ===", title, entries.len());
    println!();

    for entry in entries.iter().rev() {
        let star = if entry.is_saved { "*" } else { " " };
        println!(
            "{} #{:<4} {}  {:<14} {:>5}/{:<5} kcal  {}",
            star,
            entry.id,
            entry.date,
            entry.diet_type.label(),
            entry.actual_calories,
            entry.target_calories,
            entry.foods.join(", ")
        );
    }

    println!();
}
