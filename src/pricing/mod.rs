pub mod constants;
pub mod lookup;
pub mod normalize;

pub use constants::*;
pub use lookup::{estimate_price, match_price, name_similarity};
pub use normalize::normalize_name;
