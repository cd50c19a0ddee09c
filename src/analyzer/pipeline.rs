use std::cmp::Ordering;

use crate::analyzer::discount::{bulk_multiplier, estimate_cost};
use crate::analyzer::frequency::ingredient_usage;
use crate::models::{IngredientAnalysis, MealPlan};
use crate::pricing::estimate_price;

/// Run the full analysis pipeline over a meal plan.
///
/// Counts ingredient usage, resolves unit prices, applies bulk discounts, and
/// returns one record per distinct normalized ingredient, sorted by savings
/// descending, then usage descending, then name ascending. Pure function: no
/// I/O, no shared state, identical input gives identical output.
pub fn analyze_plan(plan: &MealPlan) -> Vec<IngredientAnalysis> {
    let mut records: Vec<IngredientAnalysis> = ingredient_usage(plan)
        .into_iter()
        .map(|(name, usage)| {
            let unit_price = estimate_price(&name);
            let multiplier = bulk_multiplier(usage);
            let (total_cost, savings) = estimate_cost(usage, unit_price);

            IngredientAnalysis {
                name,
                usage,
                unit_price,
                multiplier,
                total_cost,
                savings,
            }
        })
        .collect();

    records.sort_by(|a, b| {
        match b.savings.partial_cmp(&a.savings) {
            Some(Ordering::Equal) | None => {}
            Some(ord) => return ord,
        }
        b.usage.cmp(&a.usage).then_with(|| a.name.cmp(&b.name))
    });

    records
}
