// Core business logic module

pub mod config;
pub mod output;
pub mod report;

// Re-export commonly used items
pub use config::{OutputFormat, ReportConfig};
pub use report::{Report, ReportAggregator};
