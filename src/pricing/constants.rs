use std::collections::HashMap;
use std::sync::LazyLock;

/// Fallback unit price when an ingredient has no table match.
pub const DEFAULT_UNIT_PRICE: f64 = 2.99;

/// Similarity score assigned when one name contains the other outright.
pub const CONTAINMENT_SCORE: f64 = 0.9;

/// Minimum similarity for a fuzzy price match; at or below this the
/// default price is used instead.
pub const MATCH_THRESHOLD: f64 = 0.5;

/// Two words are considered the same if their edit distance is at most this.
pub const WORD_EDIT_DISTANCE_MAX: usize = 2;

/// Bulk discount tiers: (minimum usage count, cost multiplier), checked in
/// order. Usage of 1 falls through to no discount.
pub const BULK_DISCOUNT_TIERS: &[(u32, f64)] = &[(7, 0.55), (5, 0.65), (3, 0.75), (2, 0.85)];

/// Savings below this are omitted from shopping-list line annotations.
pub const SAVINGS_DISPLAY_THRESHOLD: f64 = 0.50;

/// Savings above this mark an ingredient as a high-value item.
pub const HIGH_VALUE_THRESHOLD: f64 = 1.00;

/// Minimum usage count before a line suggests buying a bulk size.
pub const BULK_SUGGESTION_MIN_USAGE: u32 = 5;

/// Estimated unit prices for common ingredients, in dollars.
///
/// Order matters: fuzzy lookup scans this slice front to back and keeps the
/// first entry reaching the best score, so ties break toward earlier entries.
/// That tie-break is part of the contract; reorder with care.
pub static PRICE_TABLE: &[(&str, f64)] = &[
    // Produce
    ("onion", 0.89),
    ("garlic", 0.50),
    ("tomato", 1.29),
    ("potato", 0.79),
    ("sweet potato", 0.99),
    ("carrot", 0.69),
    ("celery", 1.49),
    ("bell pepper", 1.19),
    ("spinach", 2.49),
    ("lettuce", 1.79),
    ("cucumber", 0.99),
    ("zucchini", 1.09),
    ("broccoli", 1.89),
    ("cauliflower", 2.29),
    ("mushroom", 2.49),
    ("avocado", 1.49),
    ("lemon", 0.69),
    ("lime", 0.49),
    ("apple", 0.89),
    ("banana", 0.29),
    ("ginger", 1.19),
    ("cilantro", 0.89),
    ("parsley", 0.99),
    ("basil", 2.29),
    ("green onion", 0.99),
    ("corn", 0.69),
    ("peas", 1.49),
    // Meat and seafood
    ("chicken breast", 3.99),
    ("chicken thigh", 2.99),
    ("chicken", 3.49),
    ("ground beef", 4.99),
    ("beef", 6.99),
    ("pork", 3.99),
    ("bacon", 4.49),
    ("sausage", 3.49),
    ("turkey", 4.29),
    ("ham", 3.99),
    ("salmon", 8.99),
    ("shrimp", 7.99),
    ("tuna", 1.29),
    // Dairy and eggs
    ("milk", 3.49),
    ("butter", 3.99),
    ("cheddar cheese", 3.79),
    ("parmesan cheese", 4.99),
    ("mozzarella", 3.99),
    ("cheese", 3.49),
    ("yogurt", 1.19),
    ("cream cheese", 2.29),
    ("sour cream", 1.99),
    ("cream", 2.49),
    ("egg", 2.99),
    // Pantry
    ("rice", 2.99),
    ("pasta", 1.49),
    ("bread", 2.49),
    ("flour", 2.29),
    ("sugar", 2.49),
    ("salt", 0.99),
    ("black pepper", 1.99),
    ("olive oil", 6.99),
    ("vegetable oil", 3.99),
    ("soy sauce", 2.99),
    ("vinegar", 1.99),
    ("honey", 4.49),
    ("oats", 2.79),
    ("black beans", 1.19),
    ("lentils", 1.99),
    ("chickpeas", 1.09),
    ("tomato sauce", 1.29),
    ("chicken broth", 1.99),
    ("tortilla", 2.49),
    ("quinoa", 4.99),
];

/// Exact-match index over PRICE_TABLE.
pub static PRICE_INDEX: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| PRICE_TABLE.iter().copied().collect());

/// Descriptor words stripped during name normalization.
pub static DESCRIPTOR_WORDS: &[&str] = &[
    "fresh", "dried", "organic", "chopped", "sliced", "diced", "minced", "grated", "shredded",
    "crushed", "frozen", "canned", "cooked", "raw", "ripe", "large", "small", "medium",
    "boneless", "skinless", "lean", "finely", "thinly", "whole", "of",
];

/// Measurement-unit words stripped during name normalization.
pub static UNIT_WORDS: &[&str] = &[
    "cup", "cups", "tablespoon", "tablespoons", "tbsp", "teaspoon", "teaspoons", "tsp", "ounce",
    "ounces", "oz", "pound", "pounds", "lb", "lbs", "gram", "grams", "g", "kg", "kilogram",
    "milliliter", "milliliters", "ml", "liter", "liters", "l", "pinch", "dash", "clove", "cloves",
    "slice", "slices", "piece", "pieces", "can", "cans", "bunch", "head", "stalk", "stalks",
    "sprig", "sprigs",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_index_matches_table() {
        assert_eq!(PRICE_INDEX.len(), PRICE_TABLE.len());
        assert_eq!(PRICE_INDEX.get("onion"), Some(&0.89));
    }

    #[test]
    fn test_discount_tiers_are_ordered() {
        // Descending usage thresholds with non-decreasing multipliers, so the
        // first matching tier is always the deepest discount the count earns.
        for window in BULK_DISCOUNT_TIERS.windows(2) {
            assert!(window[0].0 > window[1].0);
            assert!(window[0].1 < window[1].1);
        }
    }

    #[test]
    fn test_table_keys_are_normalized_form() {
        for (key, price) in PRICE_TABLE {
            assert_eq!(*key, key.to_lowercase());
            assert!(*price > 0.0);
        }
    }
}
