use std::io;

use log::{debug, warn};

use crate::ui::formatters::format_size;

use super::collector::MetricCollector;
use super::types::{
    CollectorOutcome, DiskIoCounters, DiskPartitionEntry, Partition, PartitionUsage, DISK_USAGE,
};

/// Mounted partitions, their usage, and global disk I/O counters
pub trait DiskSource {
    fn partitions(&mut self) -> Vec<Partition>;

    /// Usage for one mountpoint. `PermissionDenied` is expected for some mounts.
    fn usage(&self, mountpoint: &str) -> io::Result<PartitionUsage>;

    fn io_counters(&mut self) -> Option<DiskIoCounters>;
}

pub struct DiskCollector<S> {
    source: S,
}

impl<S: DiskSource> DiskCollector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// List partitions and attach usage where the query succeeds
    pub fn entries(&mut self) -> Vec<DiskPartitionEntry> {
        self.source
            .partitions()
            .into_iter()
            .map(|part| {
                let usage = match self.source.usage(&part.mountpoint) {
                    Ok(usage) => Some(usage),
                    Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                        debug!("Skipping usage for {}: {}", part.mountpoint, e);
                        None
                    }
                    Err(e) => {
                        warn!("Failed to read usage for {}: {}", part.mountpoint, e);
                        None
                    }
                };

                DiskPartitionEntry {
                    device: part.device,
                    mountpoint: part.mountpoint,
                    filesystem_type: part.filesystem_type,
                    usage,
                }
            })
            .collect()
    }
}

impl<S: DiskSource> MetricCollector for DiskCollector<S> {
    fn title(&self) -> &'static str {
        DISK_USAGE
    }

    fn collect(&mut self) -> CollectorOutcome {
        let mut lines = Vec::new();

        for entry in self.entries() {
            lines.push(format!(
                "[{} mounted on {} ({})]",
                entry.device, entry.mountpoint, entry.filesystem_type
            ));

            if let Some(usage) = entry.usage {
                lines.push(format!("  Total: {}", format_size(usage.total as f64)));
                lines.push(format!("  Used:  {}", format_size(usage.used as f64)));
                lines.push(format!("  Free:  {}", format_size(usage.free as f64)));
                lines.push(format!("  Percent: {:.1}%", usage.percent));
                lines.push(String::new());
            }
        }

        match self.source.io_counters() {
            Some(io) => lines.push(format!(
                "Disk I/O — Read: {}, Write: {}",
                format_size(io.read_bytes as f64),
                format_size(io.write_bytes as f64)
            )),
            None => lines.push("Disk I/O: unavailable".to_string()),
        }

        CollectorOutcome::Collected(lines)
    }
}
