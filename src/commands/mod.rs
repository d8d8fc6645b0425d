// Command handlers module
pub mod fields;
pub mod view;

// Re-exports for cleaner imports
pub use fields::execute as fields;
pub use view::execute as view;
