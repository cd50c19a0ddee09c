use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single meal: a title and a list of free-text ingredient lines.
///
/// Both fields are optional in the wire format; a meal with no ingredients
/// contributes nothing to the analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meal {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl Meal {
    pub fn new(title: &str, ingredients: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// True when the meal lists no ingredients at all.
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

/// Meal slots within a single day, keyed by slot name (breakfast/lunch/dinner).
pub type DaySlots = BTreeMap<String, Meal>;

/// A full meal plan: day key -> meal slot -> meal.
///
/// Deserialized straight from caller-supplied JSON. A top-level value that is
/// not an object (e.g. `null`) fails deserialization and the error propagates.
/// BTreeMap keeps day/slot traversal order deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    pub days: BTreeMap<String, DaySlots>,
}

impl MealPlan {
    /// Iterate over every meal across all days and slots.
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        self.days.values().flat_map(|slots| slots.values())
    }

    /// Total number of meals in the plan.
    pub fn meal_count(&self) -> usize {
        self.days.values().map(|slots| slots.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_plan() {
        let json = r#"{
            "monday": {
                "breakfast": {"title": "Omelette", "ingredients": ["2 eggs", "cheese"]},
                "lunch": {"title": "Salad"}
            }
        }"#;

        let plan: MealPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.meal_count(), 2);

        let lunch = &plan.days["monday"]["lunch"];
        assert!(lunch.is_empty());
    }

    #[test]
    fn test_null_plan_is_an_error() {
        let result: Result<MealPlan, _> = serde_json::from_str("null");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_plan() {
        let plan: MealPlan = serde_json::from_str("{}").unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.meals().count(), 0);
    }
}
