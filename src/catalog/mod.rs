pub mod classifier;
pub mod loader;
pub mod rules;

pub use classifier::{classify, classify_flags};
pub use loader::{CatalogSummary, FoodCatalog, REQUIRED_COLUMNS};
pub use rules::{ClassificationRules, RULES_VERSION};
