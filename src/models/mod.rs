pub mod analysis;
pub mod plan;

pub use analysis::{Department, IngredientAnalysis, OrganizedList};
pub use plan::{Meal, MealPlan};
