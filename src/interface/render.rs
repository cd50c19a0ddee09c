use crate::listing::format_shopping_list;
use crate::models::{Department, IngredientAnalysis, OrganizedList};
use crate::pricing::constants::PRICE_TABLE;

/// Display the flat annotated shopping list with a savings summary.
pub fn display_shopping_list(records: &[IngredientAnalysis]) {
    if records.is_empty() {
        println!("Shopping list is empty (no ingredients in the plan).");
        return;
    }

    println!();
    println!("=== Shopping List ===");
    println!();

    for (i, line) in format_shopping_list(records).iter().enumerate() {
        println!("{:>3}. {}", i + 1, line);
    }

    let total_cost: f64 = records.iter().map(|r| r.total_cost).sum();
    let total_savings: f64 = records.iter().map(|r| r.savings).sum();

    println!();
    println!("--- Summary ---");
    println!("Distinct ingredients: {}", records.len());
    println!("Estimated cost: ${:.2}", total_cost);
    println!("Estimated bulk savings: ${:.2}", total_savings);
    println!();
}

/// Display the department-organized shopping list.
pub fn display_organized_list(list: &OrganizedList) {
    if list.item_count() == 0 {
        println!("Shopping list is empty (no ingredients in the plan).");
        return;
    }

    println!();
    println!("=== Shopping List by Department ===");

    for department in Department::ALL {
        let bucket = list.bucket(department);
        if bucket.is_empty() {
            continue;
        }

        println!();
        println!("[{}]", department.as_str());
        for line in bucket {
            println!("  {}", line);
        }
    }

    println!();
    println!("Total estimated savings: ${:.2}", list.total_savings);

    if !list.high_value_items.is_empty() {
        println!("High value items: {}", list.high_value_items.join(", "));
    }
    println!();
}

/// Dump the built-in price table, optionally filtered by substring.
pub fn display_price_table(filter: Option<&str>) {
    let entries: Vec<(&str, f64)> = PRICE_TABLE
        .iter()
        .filter(|(key, _)| filter.is_none_or(|f| key.contains(f)))
        .map(|(key, price)| (*key, *price))
        .collect();

    if entries.is_empty() {
        println!("No price table entries match the filter.");
        return;
    }

    println!();
    println!("=== Price Table ({} entries) ===", entries.len());
    println!();

    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(10);

    for (key, price) in entries {
        println!("  {:<width$} ${:>5.2}", key, price, width = max_key_len);
    }
    println!();
}
