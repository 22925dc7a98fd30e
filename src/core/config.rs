use std::path::PathBuf;
use std::time::Duration;

/// Default file the report is written to, relative to the working directory
pub const DEFAULT_REPORT_FILE: &str = "system_report.txt";

/// Default GPU query program, resolved on `PATH`
pub const DEFAULT_NVIDIA_SMI: &str = "nvidia-smi";

/// Rendering used for console and file output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for a single report run.
///
/// Built from CLI flags by the `report` command; nothing is persisted.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Wall-clock window for the per-core CPU usage sample
    pub sample_interval: Duration,
    /// Upper bound on how long the GPU query process may run
    pub gpu_timeout: Duration,
    /// Program used for the GPU query
    pub nvidia_smi: String,
    pub output_path: PathBuf,
    pub write_file: bool,
    pub print_console: bool,
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sample_interval: Duration::from_secs(1),
            gpu_timeout: Duration::from_secs(10),
            nvidia_smi: DEFAULT_NVIDIA_SMI.to_string(),
            output_path: PathBuf::from(DEFAULT_REPORT_FILE),
            write_file: true,
            print_console: true,
            format: OutputFormat::Text,
        }
    }
}
