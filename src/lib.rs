pub mod analyzer;
pub mod cli;
pub mod error;
pub mod interface;
pub mod limit;
pub mod listing;
pub mod models;
pub mod pricing;
pub mod storage;

pub use error::{GrocerError, Result};
pub use models::{IngredientAnalysis, Meal, MealPlan, OrganizedList};
