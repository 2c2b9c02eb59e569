use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::catalog::FoodCatalog;
use crate::models::{DietType, FoodItem};

/// Items eligible for a diet type's plan.
///
/// Meat and seafood pools are rounded out with an independent random sample
/// of the vegetarian-but-not-vegan items, so repeated calls differ unless the
/// rng is seeded.
pub fn select_pool<'a, R: Rng + ?Sized>(
    catalog: &'a FoodCatalog,
    diet: DietType,
    base_fraction: f64,
    rng: &mut R,
) -> Vec<&'a FoodItem> {
    let items = catalog.items();

    let pool: Vec<&FoodItem> = match diet {
        DietType::Vegetarian => items.iter().filter(|i| i.flags.vegetarian).collect(),
        DietType::Vegan => items.iter().filter(|i| i.flags.vegan).collect(),
        DietType::SeafoodMix => {
            let mut pool: Vec<&FoodItem> = items.iter().filter(|i| i.flags.seafood).collect();
            pool.extend(sample_vegetarian_base(items, base_fraction, rng));
            pool
        }
        DietType::NonVegetarian => {
            let mut pool: Vec<&FoodItem> =
                items.iter().filter(|i| i.flags.non_vegetarian).collect();
            pool.extend(sample_vegetarian_base(items, base_fraction, rng));
            pool
        }
    };

    debug!(diet = %diet, size = pool.len(), "selected pool");
    pool
}

/// Random subset of vegetarian non-vegan items, sized `round(fraction * n)`.
///
/// Catalog order is kept.
pub fn sample_vegetarian_base<'a, R: Rng + ?Sized>(
    items: &'a [FoodItem],
    fraction: f64,
    rng: &mut R,
) -> Vec<&'a FoodItem> {
    let base: Vec<&FoodItem> = items.iter().filter(|i| i.is_vegetarian_base()).collect();
    let amount = ((base.len() as f64) * fraction.clamp(0.0, 1.0)).round() as usize;

    let mut indices: Vec<usize> = (0..base.len()).collect();
    indices.shuffle(rng);
    indices.truncate(amount);
    indices.sort_unstable();

    indices.into_iter().map(|idx| base[idx]).collect()
}
