pub mod export;
pub mod formatter;

pub use export::{format_csv, write_csv, write_json, CSV_HEADER};
pub use formatter::{
    format_component_bars, format_histogram, format_score, format_score_table, format_summary,
    should_use_colors,
};
