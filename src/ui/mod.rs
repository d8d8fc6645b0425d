// UI and formatting module

pub mod formatters;
pub mod process_table;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_bytes, format_disk_usage, format_percent, format_uptime};
pub use process_table::{format_row, print_process_table};
