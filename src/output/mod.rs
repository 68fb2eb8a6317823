//! Output formatting for calculator results.
//!
//! - [`csv`] - CSV output of subnet plans
//! - [`json`] - JSON output of any result
//! - [`terminal`] - Terminal field and badge formatting

mod csv;
mod json;
mod terminal;

pub use csv::{format_csv_row, render_plan, summary_lines, CSV_HEADER};
pub use json::to_json;
pub use terminal::{class_badge, format_field, type_badge};
