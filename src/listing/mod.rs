pub mod classify;
pub mod export;
pub mod format;
pub mod organize;

pub use classify::classify_department;
pub use export::{write_analysis_csv, write_analysis_json};
pub use format::{format_line, format_shopping_list};
pub use organize::organize_records;
