use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{FoodItem, MealPlan, PlanItem};
use crate::planner::constants::*;

/// Which flag marks the "meat" portion of a meat-ratio plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeatSource {
    NonVegetarian,
    Seafood,
}

/// How a plan splits its calories.
///
/// A zero `meat_ratio` builds a variety-only plan; anything above zero reserves
/// that share of the target for items flagged by `meat_source`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanProfile {
    pub meat_ratio: f64,
    pub meat_source: MeatSource,
}

impl PlanProfile {
    pub fn variety() -> Self {
        Self {
            meat_ratio: 0.0,
            meat_source: MeatSource::NonVegetarian,
        }
    }

    pub fn with_meat(meat_ratio: f64, meat_source: MeatSource) -> Self {
        Self {
            meat_ratio,
            meat_source,
        }
    }

    pub fn is_meat(&self, item: &FoodItem) -> bool {
        match self.meat_source {
            MeatSource::NonVegetarian => item.flags.non_vegetarian,
            MeatSource::Seafood => item.flags.seafood,
        }
    }
}

/// Plan under construction with its remaining calorie budget.
///
/// The budget goes negative when a pick overshoots.
struct PlanDraft<'a> {
    remaining: i64,
    chosen: Vec<&'a FoodItem>,
}

impl<'a> PlanDraft<'a> {
    fn new(target: u32) -> Self {
        Self {
            remaining: i64::from(target),
            chosen: Vec::with_capacity(MAX_PLAN_ITEMS),
        }
    }

    fn push(&mut self, item: &'a FoodItem) {
        self.remaining -= i64::from(item.calories);
        self.chosen.push(item);
    }

    fn has_food(&self, name: &str) -> bool {
        self.chosen.iter().any(|item| item.name == name)
    }

    fn uses_subcategory(&self, subcategory: &str) -> bool {
        self.chosen.iter().any(|item| item.subcategory == subcategory)
    }

    fn len(&self) -> usize {
        self.chosen.len()
    }

    fn is_full(&self) -> bool {
        self.chosen.len() >= MAX_PLAN_ITEMS
    }
}

/// Build one plan of up to four items approximating `target` calories.
///
/// Returns an empty plan when the target is zero or the pool spans fewer than
/// three subcategories.
pub fn build_plan<R: Rng + ?Sized>(
    pool: &[&FoodItem],
    target: u32,
    profile: &PlanProfile,
    rng: &mut R,
) -> MealPlan {
    if target == 0 {
        return MealPlan::empty();
    }

    let subcategories = distinct_subcategories(pool);
    if subcategories.len() < MIN_POOL_SUBCATEGORIES {
        return MealPlan::empty();
    }

    let mut draft = PlanDraft::new(target);

    if profile.meat_ratio > 0.0 {
        add_meat(pool, target, profile, &mut draft, rng);
        add_sides(pool, profile, &mut draft, rng);
    } else {
        add_variety(pool, &subcategories, &mut draft, rng);
    }

    top_up(pool, &subcategories, &mut draft, rng);

    let items: Vec<PlanItem> = draft.chosen.into_iter().map(PlanItem::from).collect();
    MealPlan::new(trim_to_limit(items, target))
}

/// Pick up to two meat items against `target * meat_ratio`.
fn add_meat<'a, R: Rng + ?Sized>(
    pool: &[&'a FoodItem],
    target: u32,
    profile: &PlanProfile,
    draft: &mut PlanDraft<'a>,
    rng: &mut R,
) {
    let mut meat: Vec<&FoodItem> = pool.iter().copied().filter(|i| profile.is_meat(i)).collect();
    let meat_target = (f64::from(target) * profile.meat_ratio) as i64;

    let meat_subcategories = distinct_subcategories(&meat);
    if meat_subcategories.len() >= MAX_MEAT_SUBCATEGORIES {
        let chosen: Vec<&str> = meat_subcategories
            .choose_multiple(rng, MAX_MEAT_SUBCATEGORIES)
            .copied()
            .collect();
        meat.retain(|item| chosen.contains(&item.subcategory.as_str()));
    }

    let portion_cap = meat_target as f64 * MEAT_PORTION_CAP;
    let mut reasonable: Vec<&FoodItem> = meat
        .iter()
        .copied()
        .filter(|item| f64::from(item.calories) < portion_cap)
        .collect();
    if reasonable.is_empty() {
        reasonable = meat;
    }

    let mut remaining_meat = meat_target;
    let mut meat_count = 0;

    while remaining_meat > 0 && meat_count < MAX_MEAT_ITEMS {
        let candidates: Vec<&FoodItem> =
            fitting_or_lowest(&reasonable, remaining_meat)
                .into_iter()
                .filter(|item| !draft.has_food(&item.name))
                .collect();

        let Some(&pick) = candidates.choose(rng) else {
            break;
        };

        remaining_meat -= i64::from(pick.calories);
        meat_count += 1;
        draft.push(pick);
    }
}

/// Fill the rest of a meat plan from non-meat items, favouring new subcategories.
fn add_sides<'a, R: Rng + ?Sized>(
    pool: &[&'a FoodItem],
    profile: &PlanProfile,
    draft: &mut PlanDraft<'a>,
    rng: &mut R,
) {
    let mut sides: Vec<&FoodItem> = pool.iter().copied().filter(|i| !profile.is_meat(i)).collect();

    let open: Vec<&str> = distinct_subcategories(&sides)
        .into_iter()
        .filter(|s| !draft.uses_subcategory(s))
        .collect();
    if open.len() >= MAX_SIDE_SUBCATEGORIES {
        let chosen: Vec<&str> = open
            .choose_multiple(rng, MAX_SIDE_SUBCATEGORIES)
            .copied()
            .collect();
        sides.retain(|item| chosen.contains(&item.subcategory.as_str()));
    }

    while !draft.is_full() && draft.remaining > 0 {
        let fresh: Vec<&FoodItem> = fitting_or_lowest(&sides, draft.remaining)
            .into_iter()
            .filter(|item| !draft.has_food(&item.name))
            .collect();
        let unused: Vec<&FoodItem> = fresh
            .iter()
            .copied()
            .filter(|item| !draft.uses_subcategory(&item.subcategory))
            .collect();

        let candidates = if unused.is_empty() { &fresh } else { &unused };
        let Some(pick) = closest_to(candidates, draft.remaining as f64 / 2.0) else {
            break;
        };
        draft.push(pick);
    }
}

/// One item from each of up to four random subcategories.
fn add_variety<'a, R: Rng + ?Sized>(
    pool: &[&'a FoodItem],
    subcategories: &[&str],
    draft: &mut PlanDraft<'a>,
    rng: &mut R,
) {
    let count = subcategories.len().min(MAX_PLAN_ITEMS);
    let chosen: Vec<&str> = subcategories.choose_multiple(rng, count).copied().collect();

    for (i, subcategory) in chosen.iter().enumerate() {
        let left = count - i;
        // Last subcategory takes whatever budget is left.
        let sub_target = if left == 1 {
            draft.remaining
        } else {
            let jitter = rng.gen_range(SUBTARGET_JITTER_MIN..=SUBTARGET_JITTER_MAX);
            (draft.remaining as f64 / left as f64 * jitter) as i64
        };

        let group: Vec<&FoodItem> = pool
            .iter()
            .copied()
            .filter(|item| item.subcategory == *subcategory && !draft.has_food(&item.name))
            .collect();

        if let Some(pick) = closest_to(&fitting_or_lowest(&group, sub_target), sub_target as f64) {
            draft.push(pick);
        }

        if draft.remaining <= 0 {
            break;
        }
    }
}

/// Add items until the plan has four or nothing fits the remaining budget.
fn top_up<'a, R: Rng + ?Sized>(
    pool: &[&'a FoodItem],
    subcategories: &[&str],
    draft: &mut PlanDraft<'a>,
    rng: &mut R,
) {
    if draft.is_full() || draft.remaining <= 0 {
        return;
    }

    let open: Vec<&str> = subcategories
        .iter()
        .copied()
        .filter(|s| !draft.uses_subcategory(s))
        .collect();
    let wanted = (MAX_PLAN_ITEMS - draft.len()).min(open.len());
    let preferred: Vec<&str> = open.choose_multiple(rng, wanted).copied().collect();

    while !draft.is_full() && draft.remaining > 0 {
        let eligible: Vec<&FoodItem> = pool
            .iter()
            .copied()
            .filter(|item| {
                !draft.has_food(&item.name) && i64::from(item.calories) <= draft.remaining
            })
            .collect();
        let favoured: Vec<&FoodItem> = eligible
            .iter()
            .copied()
            .filter(|item| preferred.contains(&item.subcategory.as_str()))
            .collect();

        let candidates = if favoured.is_empty() { &eligible } else { &favoured };
        let slots = (MAX_PLAN_ITEMS - draft.len()) as f64;
        let Some(pick) = closest_to(candidates, draft.remaining as f64 / slots) else {
            break;
        };
        draft.push(pick);
    }
}

/// Cut a plan down to four items.
///
/// Over target: drop, one at a time, whichever item leaves the total closest
/// to target. At or under target: keep one item per subcategory first, then
/// the items nearest a quarter of the target.
///
/// `build_plan` stops at four items on every path, so only plans assembled
/// elsewhere reach the trimming branches.
pub fn trim_to_limit(items: Vec<PlanItem>, target: u32) -> Vec<PlanItem> {
    if items.len() <= MAX_PLAN_ITEMS {
        return items;
    }

    let target = i64::from(target);
    let total: i64 = items.iter().map(|item| i64::from(item.calories)).sum();

    if total > target {
        let mut keep = items;
        while keep.len() > MAX_PLAN_ITEMS {
            let total: i64 = keep.iter().map(|item| i64::from(item.calories)).sum();
            let Some(idx) = (0..keep.len())
                .min_by_key(|&i| (total - i64::from(keep[i].calories) - target).abs())
            else {
                break;
            };
            keep.remove(idx);
        }
        return keep;
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut keep = Vec::with_capacity(MAX_PLAN_ITEMS);
    let mut rest = Vec::new();

    for item in items {
        if keep.len() < MAX_PLAN_ITEMS && seen.insert(item.subcategory.clone()) {
            keep.push(item);
        } else {
            rest.push(item);
        }
    }

    let quarter = target as f64 / MAX_PLAN_ITEMS as f64;
    rest.sort_by(|a, b| {
        let da = (quarter - f64::from(a.calories)).abs();
        let db = (quarter - f64::from(b.calories)).abs();
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });

    keep.extend(rest.into_iter().take(MAX_PLAN_ITEMS - keep.len()));
    keep
}

/// Subcategories in first-appearance order.
pub fn distinct_subcategories<'a>(items: &[&'a FoodItem]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|item| item.subcategory.as_str())
        .filter(|s| seen.insert(*s))
        .collect()
}

/// Items within `budget`, or the lowest-calorie few when none fit.
fn fitting_or_lowest<'a>(items: &[&'a FoodItem], budget: i64) -> Vec<&'a FoodItem> {
    let fitting: Vec<&FoodItem> = items
        .iter()
        .copied()
        .filter(|item| i64::from(item.calories) <= budget)
        .collect();
    if !fitting.is_empty() {
        return fitting;
    }

    let mut lowest = items.to_vec();
    lowest.sort_by_key(|item| item.calories);
    lowest.truncate(FALLBACK_CANDIDATES);
    lowest
}

/// First item whose calories are nearest `goal`.
fn closest_to<'a>(items: &[&'a FoodItem], goal: f64) -> Option<&'a FoodItem> {
    items.iter().copied().min_by(|a, b| {
        let da = (f64::from(a.calories) - goal).abs();
        let db = (f64::from(b.calories) - goal).abs();
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    })
}
