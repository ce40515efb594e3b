// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod item;
pub mod parser;

// Re-export types so code using `crate::model::Task` keeps working
pub use item::{Task, TaskStatus};
pub use parser::{SmartInput, parse_smart_input};
