use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::MealPlan;

/// Load a meal plan from a JSON file.
///
/// A file whose top-level value is not an object fails with a JSON error,
/// which propagates to the caller unchanged.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<MealPlan> {
    let content = fs::read_to_string(path)?;
    let plan: MealPlan = serde_json::from_str(&content)?;
    Ok(plan)
}

/// Save a meal plan to a JSON file.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &MealPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
