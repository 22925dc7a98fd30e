use log::debug;

use crate::core::config::ReportConfig;
use crate::error::{Result, SysReportError};
use crate::platform::{HostDisks, HostPlatform, NvidiaSmi, SysinfoCpu, SysinfoMemory};

use super::cpu::CpuCollector;
use super::disk::DiskCollector;
use super::gpu::GpuCollector;
use super::memory::MemoryCollector;
use super::network::NetworkCollector;
use super::platform::{BootTimeCollector, PlatformCollector};
use super::types::{CollectorOutcome, MetricSection, Report, SectionStatus};

/// A unit that queries one metric domain and renders it as a report section
///
/// Implementations own their data source; the aggregator only sees the
/// outcome.
pub trait MetricCollector {
    /// Section title shown in the report header
    fn title(&self) -> &'static str;

    /// Query the underlying source and render the section body
    fn collect(&mut self) -> CollectorOutcome;
}

/// Runs collectors in registration order and assembles their sections
#[derive(Default)]
pub struct ReportAggregator {
    collectors: Vec<Box<dyn MetricCollector>>,
}

impl ReportAggregator {
    /// Create an aggregator with no collectors
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator wired to the live host, in report order
    pub fn from_config(config: &ReportConfig) -> Self {
        let mut aggregator = Self::new();
        aggregator
            .register(Box::new(PlatformCollector::new(HostPlatform::new())))
            .register(Box::new(BootTimeCollector::new(HostPlatform::new())))
            .register(Box::new(CpuCollector::new(
                SysinfoCpu::new(),
                config.sample_interval,
            )))
            .register(Box::new(MemoryCollector::new(SysinfoMemory::new())))
            .register(Box::new(DiskCollector::new(HostDisks::new())))
            .register(Box::new(GpuCollector::new(NvidiaSmi::new(
                config.nvidia_smi.clone(),
                config.gpu_timeout,
            ))))
            .register(Box::new(NetworkCollector));
        aggregator
    }

    /// Append a collector; it runs after every collector registered before it
    pub fn register(&mut self, collector: Box<dyn MetricCollector>) -> &mut Self {
        self.collectors.push(collector);
        self
    }

    pub fn len(&self) -> usize {
        self.collectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collectors.is_empty()
    }

    /// Run every collector once, in order.
    ///
    /// Tolerated failures become degraded sections; the collector has already
    /// logged the cause. The first fatal failure aborts the report and is
    /// returned tagged with its section title.
    pub fn build_report(&mut self) -> Result<Report> {
        let mut sections = Vec::with_capacity(self.collectors.len());

        for collector in self.collectors.iter_mut() {
            let title = collector.title();
            debug!("Collecting {}", title);

            match collector.collect() {
                CollectorOutcome::Collected(lines) => {
                    sections.push(MetricSection::new(title, lines, SectionStatus::Complete));
                }
                CollectorOutcome::Tolerated(lines) => {
                    debug!("{} degraded", title);
                    sections.push(MetricSection::new(title, lines, SectionStatus::Degraded));
                }
                CollectorOutcome::Fatal(err) => {
                    return Err(SysReportError::collector(title, err));
                }
            }
        }

        Ok(Report::new(sections))
    }
}
