use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Version tag of the built-in rules table.
pub const RULES_VERSION: &str = "1";

// ─────────────────────────────────────────────────────────────────────────────
// Vegetarian rules
// ─────────────────────────────────────────────────────────────────────────────

const NON_VEGETARIAN_SUBCATEGORIES: &[&str] = &[
    "Meat",
    "Beef & Veal",
    "Pork & Ham",
    "Poultry",
    "Game Meats",
    "Sausages & Cold Cuts",
    "Fish & Seafood",
    "Meat & Poultry",
    "Processed Meats",
];

const MEAT_KEYWORDS: &[&str] = &[
    // Red meat
    "beef", "pork", "lamb", "mutton", "veal", "goat", "venison", "deer", "elk", "buffalo", "bison",
    "rabbit", "horse", "boar", "ham", "bacon",
    // Processed meats
    "sausage", "salami", "pepperoni", "prosciutto", "bologna", "pastrami", "corned beef",
    "hotdog", "hot dog", "bratwurst", "chorizo", "steak", "jerky", "meatloaf", "meatball",
    "hamburger", "burger", "pate",
    // Poultry
    "chicken", "turkey", "duck", "goose", "quail", "pheasant", "pigeon", "guinea fowl",
    "ostrich", "emu", "drumstick", "wing", "poultry",
    // Fish
    "fish", "salmon", "tuna", "tilapia", "sardine", "anchovy", "mackerel", "cod", "halibut",
    "trout", "snapper", "haddock", "catfish", "bass", "herring", "swordfish", "mahi-mahi",
    "flounder", "perch", "sole",
    // Seafood
    "shrimp", "prawn", "lobster", "crab", "oyster", "mussel", "clam", "scallop", "squid",
    "octopus", "calamari", "crawfish", "shellfish", "seafood",
    // Organ meats
    "offal", "liver", "kidney", "heart", "tongue", "brain", "tripe", "sweetbread",
    "bone marrow", "foie gras",
    // Generic
    "meat", "carne", "flesh", "animal", "bbq", "barbecue",
];

const NON_VEGETARIAN_DISHES: &[&str] = &[
    "bolognese", "carbonara", "meatlovers", "meat lovers", "pepperoni", "al pastor", "carnitas",
    "carnivore", "hunters", "cacciatore", "barbacoa", "birria", "cottage pie", "shepherd",
    "meatball", "beef wellington", "stroganoff", "schnitzel", "gyro", "shawarma", "kebab",
    "meatloaf", "cheeseburger", "hamburger", "slider", "salisbury", "surf and turf",
];

const PIZZA_MEAT_TOPPINGS: &[&str] = &[
    "pepperoni", "sausage", "meat lover", "supreme", "ham", "bacon", "prosciutto", "seafood",
    "anchovy", "hawaiian",
];

// ─────────────────────────────────────────────────────────────────────────────
// Vegan rules
// ─────────────────────────────────────────────────────────────────────────────

const VEGAN_SUBCATEGORIES: &[&str] = &["Fruit", "Vegetables & Legumes", "Nuts & Seeds"];

const ANIMAL_DERIVATIVE_KEYWORDS: &[&str] = &["honey", "butter", "cheese", "creamy", "creamed"];

const NON_VEGAN_SUBCATEGORIES: &[&str] = &[
    "Dairy",
    "Eggs",
    "Milk & Yogurt",
    "Cheese",
    "Milk",
    "Ice Cream & Desserts",
    "Pastry",
    "Desserts",
    "Sweets",
    "Snacks",
    "Chocolate",
    "Cake",
    "Cookie",
    "Biscuit",
    "Breakfast Cereals",
    "Pie",
];

const NON_VEGAN_KEYWORDS: &[&str] = &[
    "milk", "cheese", "cream", "yogurt", "butter", "ghee", "egg", "honey", "dairy", "whey",
    "casein", "lactose", "mozzarella", "parmesan", "cheddar", "ricotta", "pizza", "mayo",
    "mayonnaise", "custard", "pudding", "ice cream", "gelato", "frosting", "chocolate", "cake",
    "cookie", "cheesecake", "pancake", "waffle", "brioche", "croissant", "pastry", "danish",
    "milk chocolate",
];

const KNOWN_VEGAN_FOODS: &[&str] = &[
    "bread", "whole wheat bread", "whole grain bread", "pita", "pasta", "rice", "brown rice",
    "white rice", "noodles", "cereal", "oatmeal", "quinoa", "couscous", "barley", "bulgur",
    "farro", "millet", "tempeh", "tofu", "seitan", "hummus", "tahini", "falafel", "tabbouleh",
    "sorbet", "maple syrup", "jam", "jelly", "marmalade", "peanut butter", "almond butter",
    "cashew butter", "olive oil", "coconut oil", "vegetable oil", "canola oil", "sunflower oil",
    "dark chocolate", "soy milk", "almond milk", "oat milk", "rice milk", "coconut milk",
    "soy yogurt", "coconut yogurt",
];

// ─────────────────────────────────────────────────────────────────────────────
// Seafood and meat rules
// ─────────────────────────────────────────────────────────────────────────────

const SEAFOOD_SUBCATEGORIES: &[&str] = &["Fish & Seafood"];

const SEAFOOD_KEYWORDS: &[&str] = &[
    "fish", "salmon", "tuna", "tilapia", "sardine", "herring", "anchovy", "mackerel", "cod",
    "halibut", "trout", "snapper", "shrimp", "prawn", "lobster", "crab", "oyster", "mussel",
    "clam", "scallop", "squid", "octopus", "calamari", "seafood",
];

const MEAT_SUBCATEGORIES: &[&str] = &[
    "Meat",
    "Beef & Veal",
    "Pork & Ham",
    "Poultry",
    "Game Meats",
    "Sausages & Cold Cuts",
];

const NON_VEGETARIAN_MEAT_KEYWORDS: &[&str] = &[
    "beef", "pork", "chicken", "turkey", "duck", "goose", "lamb", "mutton", "veal", "ham",
    "bacon", "sausage", "steak", "ribs", "venison", "deer", "elk", "buffalo", "bison",
    "pepperoni", "salami", "prosciutto",
];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Every subcategory set and keyword list used to flag catalog entries.
///
/// Subcategories match exactly; keywords are lowercase and matched against the
/// lowercased food name. Missing fields in a JSON table fall back to the
/// built-in lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationRules {
    pub version: String,

    pub non_vegetarian_subcategories: Vec<String>,
    /// Matched as whole words, and as substrings when longer than 3 chars.
    pub meat_keywords: Vec<String>,
    pub non_vegetarian_dishes: Vec<String>,
    pub pizza_meat_toppings: Vec<String>,

    pub vegan_subcategories: Vec<String>,
    /// Disqualify items in an otherwise vegan subcategory.
    pub animal_derivative_keywords: Vec<String>,
    pub non_vegan_subcategories: Vec<String>,
    pub non_vegan_keywords: Vec<String>,
    pub known_vegan_foods: Vec<String>,

    pub seafood_subcategories: Vec<String>,
    pub seafood_keywords: Vec<String>,

    pub meat_subcategories: Vec<String>,
    pub non_vegetarian_meat_keywords: Vec<String>,
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self {
            version: RULES_VERSION.to_string(),
            non_vegetarian_subcategories: owned(NON_VEGETARIAN_SUBCATEGORIES),
            meat_keywords: owned(MEAT_KEYWORDS),
            non_vegetarian_dishes: owned(NON_VEGETARIAN_DISHES),
            pizza_meat_toppings: owned(PIZZA_MEAT_TOPPINGS),
            vegan_subcategories: owned(VEGAN_SUBCATEGORIES),
            animal_derivative_keywords: owned(ANIMAL_DERIVATIVE_KEYWORDS),
            non_vegan_subcategories: owned(NON_VEGAN_SUBCATEGORIES),
            non_vegan_keywords: owned(NON_VEGAN_KEYWORDS),
            known_vegan_foods: owned(KNOWN_VEGAN_FOODS),
            seafood_subcategories: owned(SEAFOOD_SUBCATEGORIES),
            seafood_keywords: owned(SEAFOOD_KEYWORDS),
            meat_subcategories: owned(MEAT_SUBCATEGORIES),
            non_vegetarian_meat_keywords: owned(NON_VEGETARIAN_MEAT_KEYWORDS),
        }
    }
}

impl ClassificationRules {
    /// Load a rules table from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut rules: ClassificationRules = serde_json::from_str(&content)?;
        rules.normalize();
        Ok(rules)
    }

    /// Lowercase every keyword list so matching stays case-insensitive.
    fn normalize(&mut self) {
        for list in [
            &mut self.meat_keywords,
            &mut self.non_vegetarian_dishes,
            &mut self.pizza_meat_toppings,
            &mut self.animal_derivative_keywords,
            &mut self.non_vegan_keywords,
            &mut self.known_vegan_foods,
            &mut self.seafood_keywords,
            &mut self.non_vegetarian_meat_keywords,
        ] {
            for keyword in list.iter_mut() {
                *keyword = keyword.to_lowercase();
            }
        }
    }
}

/// Exact membership test for subcategory sets.
pub(crate) fn in_set(set: &[String], value: &str) -> bool {
    set.iter().any(|s| s == value)
}

/// True if any keyword occurs inside `haystack`.
pub(crate) fn contains_any(keywords: &[String], haystack: &str) -> bool {
    keywords.iter().any(|k| haystack.contains(k.as_str()))
}
