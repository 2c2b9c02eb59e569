use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use strsim::jaro_winkler;
use tracing::{debug, info};

use crate::catalog::classifier::classify;
use crate::catalog::rules::ClassificationRules;
use crate::error::{PlannerError, Result};
use crate::models::{FoodItem, RawFoodRecord};

/// Columns every catalog CSV must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Subcategory", "Food", "Serving", "Calories"];

/// Minimum Jaro-Winkler score for a fuzzy name suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Classified, read-only food catalog.
///
/// Built once and shared by reference; nothing mutates it after load.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
    rules_version: String,
}

/// Per-flag counts for a loaded catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total: usize,
    pub vegetarian: usize,
    pub vegan: usize,
    pub seafood: usize,
    pub non_vegetarian: usize,
    pub subcategories: usize,
}

impl FoodCatalog {
    /// Create a catalog from already classified items.
    pub fn new(items: Vec<FoodItem>, rules_version: impl Into<String>) -> Self {
        Self {
            items,
            rules_version: rules_version.into(),
        }
    }

    /// Load and classify a catalog CSV file.
    pub fn load<P: AsRef<Path>>(path: P, rules: &ClassificationRules) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let catalog = Self::from_reader(file, rules)?;
        info!(
            path = %path.display(),
            items = catalog.len(),
            rules = %catalog.rules_version,
            "loaded food catalog"
        );
        Ok(catalog)
    }

    /// Parse and classify catalog rows from any CSV source.
    ///
    /// The first bad row aborts the load; no partial catalog is returned.
    pub fn from_reader<R: Read>(reader: R, rules: &ClassificationRules) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(PlannerError::MissingColumn(column.to_string()));
            }
        }

        let mut items = Vec::new();
        for (index, record) in rdr.deserialize::<RawFoodRecord>().enumerate() {
            let row = index + 1;
            let item = record
                .map_err(PlannerError::from)
                .and_then(|raw| classify(&raw, rules))
                .map_err(|source| PlannerError::InvalidRow {
                    row,
                    source: Box::new(source),
                })?;
            debug!(row, item = %item.debug_string(), "classified");
            items.push(item);
        }

        Ok(Self::new(items, rules.version.clone()))
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn rules_version(&self) -> &str {
        &self.rules_version
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&FoodItem> {
        let key = name.trim().to_lowercase();
        self.items.iter().find(|item| item.key() == key)
    }

    /// Closest names to `name`, best first.
    pub fn fuzzy_find(&self, name: &str, limit: usize) -> Vec<&FoodItem> {
        let query = name.trim().to_lowercase();
        let mut candidates: Vec<(&FoodItem, f64)> = self
            .items
            .iter()
            .map(|item| (item, jaro_winkler(&item.key(), &query)))
            .filter(|(_, score)| *score > FUZZY_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().take(limit).map(|(item, _)| item).collect()
    }

    pub fn summary(&self) -> CatalogSummary {
        let subcategories: HashSet<&str> =
            self.items.iter().map(|item| item.subcategory.as_str()).collect();

        CatalogSummary {
            total: self.items.len(),
            vegetarian: self.items.iter().filter(|i| i.flags.vegetarian).count(),
            vegan: self.items.iter().filter(|i| i.flags.vegan).count(),
            seafood: self.items.iter().filter(|i| i.flags.seafood).count(),
            non_vegetarian: self.items.iter().filter(|i| i.flags.non_vegetarian).count(),
            subcategories: subcategories.len(),
        }
    }
}
