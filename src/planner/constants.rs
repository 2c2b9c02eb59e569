/// Maximum number of items in a single plan.
pub const MAX_PLAN_ITEMS: usize = 4;

/// Pools with fewer distinct subcategories produce an empty plan.
pub const MIN_POOL_SUBCATEGORIES: usize = 3;

/// Maximum meat or seafood items per plan.
pub const MAX_MEAT_ITEMS: usize = 2;

/// Meat items are drawn from at most this many subcategories.
pub const MAX_MEAT_SUBCATEGORIES: usize = 2;

/// Non-meat fill is drawn from at most this many unused subcategories.
pub const MAX_SIDE_SUBCATEGORIES: usize = 2;

/// A single meat item should stay below this share of the meat calorie target.
pub const MEAT_PORTION_CAP: f64 = 0.7;

/// How many lowest-calorie items to consider when nothing fits the budget.
pub const FALLBACK_CANDIDATES: usize = 5;

/// Random spread applied to each subcategory's calorie share.
pub const SUBTARGET_JITTER_MIN: f64 = 0.8;
pub const SUBTARGET_JITTER_MAX: f64 = 1.2;

// ─────────────────────────────────────────────────────────────────────────────
// Selection defaults (overridable through PlannerConfig)
// ─────────────────────────────────────────────────────────────────────────────

/// Builder runs per diet type.
pub const DEFAULT_ATTEMPTS: usize = 5;

/// Early-stop band as a fraction of the target.
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Share of the vegetarian base mixed into meat and seafood pools.
pub const BASE_SAMPLE_FRACTION: f64 = 0.7;

/// Fraction of calories that should come from meat in non-vegetarian plans.
pub const NON_VEGETARIAN_MEAT_RATIO: f64 = 0.4;

/// Fraction of calories that should come from seafood in seafood plans.
pub const SEAFOOD_MEAT_RATIO: f64 = 0.35;

/// Width of the min/max band reported with a request.
pub const BOUND_TOLERANCE: f64 = 0.05;
