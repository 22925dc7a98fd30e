// sysreport Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, SysReportError};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::{OutputFormat, ReportConfig};
pub use crate::core::report::{Report, ReportAggregator};

// Initialize logging
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // RUST_LOG still wins for individual modules
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
