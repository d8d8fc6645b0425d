// Procview Library - Public API

// Re-export error types
pub mod error;
pub use error::{ProcviewError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::ViewConfig;
pub use crate::core::process_view::{
    build_view, FilterConfig, PinSet, ProcessRecord, ProcessView, RegexCache, SearchQuery,
    SortConfig,
};

// Initialize logging; RUST_LOG overrides the default level
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
