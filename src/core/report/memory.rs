use crate::ui::formatters::format_size;

use super::collector::MetricCollector;
use super::types::{CollectorOutcome, MemorySnapshot, MEMORY_USAGE};

pub trait MemorySource {
    fn virtual_memory(&mut self) -> MemorySnapshot;
}

pub struct MemoryCollector<S> {
    source: S,
}

impl<S: MemorySource> MemoryCollector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: MemorySource> MetricCollector for MemoryCollector<S> {
    fn title(&self) -> &'static str {
        MEMORY_USAGE
    }

    fn collect(&mut self) -> CollectorOutcome {
        let mem = self.source.virtual_memory();

        CollectorOutcome::Collected(vec![
            format!("Total:     {}", format_size(mem.total as f64)),
            format!("Available: {}", format_size(mem.available as f64)),
            format!("Used:      {}", format_size(mem.used as f64)),
            format!("Percent:   {:.1}%", mem.used_percent()),
        ])
    }
}
