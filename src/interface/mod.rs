pub mod prompts;
pub mod render;

pub use prompts::run_price_lookup;
pub use render::{display_organized_list, display_price_table, display_shopping_list};
