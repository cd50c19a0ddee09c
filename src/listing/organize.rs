use crate::listing::classify::classify_department;
use crate::listing::format::format_line;
use crate::models::{IngredientAnalysis, OrganizedList};
use crate::pricing::constants::HIGH_VALUE_THRESHOLD;

/// Group analysis records into department buckets.
///
/// Records are expected in flat-list order (analyze_plan output); bucket
/// contents and high_value_items inherit that order. Savings strictly above
/// HIGH_VALUE_THRESHOLD qualify as high value.
pub fn organize_records(records: &[IngredientAnalysis]) -> OrganizedList {
    let mut list = OrganizedList::default();

    for record in records {
        let department = classify_department(&record.name);
        list.bucket_mut(department).push(format_line(record));
        list.total_savings += record.savings;

        if record.savings > HIGH_VALUE_THRESHOLD {
            list.high_value_items.push(record.name.clone());
        }
    }

    list
}
