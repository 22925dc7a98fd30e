use std::io;
use thiserror::Error;

/// Custom error type for sysreport
#[derive(Error, Debug)]
pub enum SysReportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Platform identity unavailable: {0}")]
    Platform(String),

    #[error("Boot time unavailable: {0}")]
    BootTime(String),

    #[error("GPU query failed: {0}")]
    GpuQuery(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{section} collector failed: {source}")]
    Collector {
        section: String,
        #[source]
        source: Box<SysReportError>,
    },
}

/// Result type alias for sysreport
pub type Result<T> = std::result::Result<T, SysReportError>;

impl SysReportError {
    pub fn platform<S: Into<String>>(msg: S) -> Self {
        SysReportError::Platform(msg.into())
    }

    pub fn boot_time<S: Into<String>>(msg: S) -> Self {
        SysReportError::BootTime(msg.into())
    }

    pub fn gpu_query<S: Into<String>>(msg: S) -> Self {
        SysReportError::GpuQuery(msg.into())
    }

    /// Wrap a fatal collector failure with the title of the section it aborted
    pub fn collector<S: Into<String>>(section: S, source: SysReportError) -> Self {
        SysReportError::Collector {
            section: section.into(),
            source: Box::new(source),
        }
    }
}
