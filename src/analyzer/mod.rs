pub mod discount;
pub mod frequency;
pub mod pipeline;

pub use discount::{bulk_multiplier, estimate_cost};
pub use frequency::ingredient_usage;
pub use pipeline::analyze_plan;
