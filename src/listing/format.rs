use crate::listing::classify::classify_department;
use crate::models::{Department, IngredientAnalysis};
use crate::pricing::constants::{BULK_SUGGESTION_MIN_USAGE, SAVINGS_DISPLAY_THRESHOLD};

/// Bulk-buy suggestion text for an ingredient's department and usage count.
///
/// Light-usage ingredients always get the regular-size suggestion; only
/// heavy reuse earns a department-specific bulk recommendation.
pub fn bulk_suggestion(department: Department, usage: u32) -> &'static str {
    if usage < BULK_SUGGESTION_MIN_USAGE {
        return "Buy regular size";
    }

    match department {
        Department::Produce => "Buy a large bag",
        Department::Meat => "Buy a family pack and freeze portions",
        Department::Dairy => "Buy the large container",
        Department::Pantry => "Buy in bulk",
        Department::Other => "Buy the larger size",
    }
}

/// One annotated shopping-list line for a record.
///
/// Savings at or below SAVINGS_DISPLAY_THRESHOLD are left off the line; the
/// record still carries them for the organized totals.
pub fn format_line(record: &IngredientAnalysis) -> String {
    let department = classify_department(&record.name);
    let suggestion = bulk_suggestion(department, record.usage);

    let mut line = format!("{} - {} (used {}x)", record.name, suggestion, record.usage);

    if record.savings > SAVINGS_DISPLAY_THRESHOLD {
        line.push_str(&format!(" - Save ${:.2}", record.savings));
    }

    line
}

/// Flat annotated shopping list, in record order.
pub fn format_shopping_list(records: &[IngredientAnalysis]) -> Vec<String> {
    records.iter().map(format_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, usage: u32, unit_price: f64, savings: f64) -> IngredientAnalysis {
        IngredientAnalysis {
            name: name.to_string(),
            usage,
            unit_price,
            multiplier: 1.0,
            total_cost: unit_price * usage as f64 - savings,
            savings,
        }
    }

    #[test]
    fn test_line_with_savings() {
        let line = format_line(&record("onion", 3, 1.0, 0.75));
        assert_eq!(line, "onion - Buy regular size (used 3x) - Save $0.75");
    }

    #[test]
    fn test_small_savings_omitted() {
        let line = format_line(&record("onion", 2, 0.89, 0.27));
        assert_eq!(line, "onion - Buy regular size (used 2x)");
    }

    #[test]
    fn test_bulk_suggestion_by_department() {
        let line = format_line(&record("chicken breast", 6, 3.99, 8.38));
        assert!(line.starts_with("chicken breast - Buy a family pack"));

        assert_eq!(bulk_suggestion(Department::Pantry, 7), "Buy in bulk");
        assert_eq!(bulk_suggestion(Department::Pantry, 2), "Buy regular size");
    }

    #[test]
    fn test_list_preserves_order() {
        let records = vec![record("a", 1, 1.0, 0.0), record("b", 1, 1.0, 0.0)];
        let lines = format_shopping_list(&records);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("a - "));
        assert!(lines[1].starts_with("b - "));
    }
}
