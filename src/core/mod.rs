// Core business logic module

pub mod config;
pub mod process_view;

// Re-export commonly used items
pub use config::ViewConfig;
pub use process_view::{build_view, ProcessRecord, ProcessView};
