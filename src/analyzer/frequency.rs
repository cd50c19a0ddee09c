use std::collections::{BTreeMap, BTreeSet};

use crate::models::MealPlan;
use crate::pricing::normalize_name;

/// Count how many meals reference each normalized ingredient.
///
/// Each meal contributes at most one count per ingredient, however many times
/// the meal mentions it. Meals with no ingredients are skipped, as are lines
/// that normalize to the empty string. BTreeMap output keeps record order
/// deterministic for downstream formatting.
pub fn ingredient_usage(plan: &MealPlan) -> BTreeMap<String, u32> {
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();

    for meal in plan.meals() {
        let names: BTreeSet<String> = meal
            .ingredients
            .iter()
            .map(|raw| normalize_name(raw))
            .filter(|name| !name.is_empty())
            .collect();

        for name in names {
            *counts.entry(name).or_insert(0) += 1;
        }
    }

    counts
}
