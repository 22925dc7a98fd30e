use crate::error::Result;
use crate::ui::formatters::format_boot_time;

use super::collector::MetricCollector;
use super::types::{CollectorOutcome, UnameInfo, BOOT_TIME, SYSTEM_INFORMATION};

/// Host identity and boot clock.
///
/// Both are expected to be available on any host this tool runs on, so
/// errors from either are fatal to the report.
pub trait PlatformSource {
    fn uname(&self) -> Result<UnameInfo>;

    /// Boot time in seconds since the Unix epoch
    fn boot_time(&self) -> Result<u64>;
}

pub struct PlatformCollector<S> {
    source: S,
}

impl<S: PlatformSource> PlatformCollector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: PlatformSource> MetricCollector for PlatformCollector<S> {
    fn title(&self) -> &'static str {
        SYSTEM_INFORMATION
    }

    fn collect(&mut self) -> CollectorOutcome {
        match self.source.uname() {
            Ok(info) => CollectorOutcome::Collected(render_uname(&info)),
            Err(e) => CollectorOutcome::Fatal(e),
        }
    }
}

fn render_uname(info: &UnameInfo) -> Vec<String> {
    vec![
        format!("System: {}", info.system),
        format!("Node Name: {}", info.node),
        format!("Release: {}", info.release),
        format!("Version: {}", info.version),
        format!("Machine: {}", info.machine),
        format!("Processor: {}", info.processor),
    ]
}

pub struct BootTimeCollector<S> {
    source: S,
}

impl<S: PlatformSource> BootTimeCollector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: PlatformSource> MetricCollector for BootTimeCollector<S> {
    fn title(&self) -> &'static str {
        BOOT_TIME
    }

    fn collect(&mut self) -> CollectorOutcome {
        match self.source.boot_time().and_then(format_boot_time) {
            Ok(stamp) => CollectorOutcome::Collected(vec![format!("Boot Time: {}", stamp)]),
            Err(e) => CollectorOutcome::Fatal(e),
        }
    }
}
