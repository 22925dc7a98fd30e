use std::collections::HashSet;
use std::io;

use sysinfo::Disks;

use crate::core::report::{DiskIoCounters, DiskSource, Partition, PartitionUsage};

/// Live [`DiskSource`]: sysinfo for the mount list and I/O, `statvfs` for usage on Unix
pub struct HostDisks {
    disks: Disks,
}

impl HostDisks {
    pub fn new() -> Self {
        Self {
            disks: Disks::new_with_refreshed_list(),
        }
    }
}

impl Default for HostDisks {
    fn default() -> Self {
        Self::new()
    }
}

impl DiskSource for HostDisks {
    fn partitions(&mut self) -> Vec<Partition> {
        self.disks.refresh(true);

        self.disks
            .list()
            .iter()
            .map(|disk| Partition {
                device: disk.name().to_string_lossy().to_string(),
                mountpoint: disk.mount_point().to_string_lossy().to_string(),
                filesystem_type: disk.file_system().to_string_lossy().to_string(),
            })
            .collect()
    }

    #[cfg(unix)]
    fn usage(&self, mountpoint: &str) -> io::Result<PartitionUsage> {
        statvfs_usage(mountpoint)
    }

    #[cfg(not(unix))]
    fn usage(&self, mountpoint: &str) -> io::Result<PartitionUsage> {
        let disk = self
            .disks
            .list()
            .iter()
            .find(|disk| disk.mount_point().to_string_lossy() == mountpoint)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, mountpoint.to_string()))?;

        let total = disk.total_space();
        let free = disk.available_space();
        Ok(PartitionUsage::new(total, total.saturating_sub(free), free))
    }

    fn io_counters(&mut self) -> Option<DiskIoCounters> {
        if self.disks.list().is_empty() {
            return None;
        }

        // Several mounts can share one device; count each device once
        let mut seen = HashSet::new();
        let mut counters = DiskIoCounters::default();
        for disk in self.disks.list() {
            if !seen.insert(disk.name().to_os_string()) {
                continue;
            }
            let usage = disk.usage();
            counters.read_bytes = counters.read_bytes.saturating_add(usage.total_read_bytes);
            counters.write_bytes = counters.write_bytes.saturating_add(usage.total_written_bytes);
        }

        Some(counters)
    }
}

/// Usage of the filesystem mounted at `mountpoint`, computed like `df`
#[cfg(unix)]
fn statvfs_usage(mountpoint: &str) -> io::Result<PartitionUsage> {
    use nix::sys::statvfs::statvfs;

    // Errno converts into io::Error, so EACCES keeps its PermissionDenied kind
    let stats = statvfs(mountpoint)?;

    let frsize = stats.fragment_size() as u64;
    let blocks = stats.blocks() as u64;
    let total = blocks * frsize;
    let free = stats.blocks_available() as u64 * frsize;
    let used = blocks.saturating_sub(stats.blocks_free() as u64) * frsize;

    Ok(PartitionUsage::new(total, used, free))
}
