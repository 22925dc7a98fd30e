use std::time::Duration;

use super::collector::MetricCollector;
use super::types::{CollectorOutcome, CpuFrequency, CPU_INFO};

/// Core counts, clocks and utilization of the host CPU
pub trait CpuSource {
    fn physical_cores(&self) -> Option<usize>;
    fn logical_cores(&self) -> usize;
    fn frequency(&mut self) -> CpuFrequency;

    /// Per-logical-core utilization, measured over `window`. Blocks for the window.
    fn per_core_usage(&mut self, window: Duration) -> Vec<f32>;

    /// Aggregate utilization since the previous sample
    fn total_usage(&mut self) -> f32;
}

pub struct CpuCollector<S> {
    source: S,
    sample_window: Duration,
}

impl<S: CpuSource> CpuCollector<S> {
    pub fn new(source: S, sample_window: Duration) -> Self {
        Self {
            source,
            sample_window,
        }
    }
}

impl<S: CpuSource> MetricCollector for CpuCollector<S> {
    fn title(&self) -> &'static str {
        CPU_INFO
    }

    fn collect(&mut self) -> CollectorOutcome {
        let physical = self
            .source
            .physical_cores()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        let logical = self.source.logical_cores();
        let freq = self.source.frequency();

        let mut lines = vec![
            format!("Physical cores: {}", physical),
            format!("Total cores:    {}", logical),
            format!("Max Frequency: {:.2}Mhz", freq.max_mhz),
            format!("Min Frequency: {:.2}Mhz", freq.min_mhz),
            format!("Current Frequency: {:.2}Mhz", freq.current_mhz),
            "CPU Usage per Core:".to_string(),
        ];

        // Per-core first, then the total as a separate, later sample
        let per_core = self.source.per_core_usage(self.sample_window);
        for (i, usage) in per_core.iter().enumerate() {
            lines.push(format!("  Core {}: {:.1}%", i, usage));
        }

        let total = self.source.total_usage();
        lines.push(format!("Total CPU Usage: {:.1}%", total));

        CollectorOutcome::Collected(lines)
    }
}
