use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::listing::classify::classify_department;
use crate::listing::organize::organize_records;
use crate::models::IngredientAnalysis;

/// Write per-ingredient analysis rows to a CSV file.
pub fn write_analysis_csv(records: &[IngredientAnalysis], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "ingredient",
        "department",
        "usage",
        "unit_price",
        "multiplier",
        "total_cost",
        "savings",
    ])?;

    for record in records {
        wtr.write_record([
            record.name.clone(),
            classify_department(&record.name).as_str().to_string(),
            record.usage.to_string(),
            format!("{:.2}", record.unit_price),
            format!("{:.2}", record.multiplier),
            format!("{:.2}", record.total_cost),
            format!("{:.2}", record.savings),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the full analysis (records plus organized view) to a JSON file.
pub fn write_analysis_json(records: &[IngredientAnalysis], path: &Path) -> Result<()> {
    let organized = organize_records(records);

    let json = serde_json::json!({
        "ingredients": records,
        "organized": organized,
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}
