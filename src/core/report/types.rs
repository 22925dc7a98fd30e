use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::{Result, SysReportError};
use crate::ui::formatters::round_tenth;

// Section titles, in report order
pub const SYSTEM_INFORMATION: &str = "System Information";
pub const BOOT_TIME: &str = "Boot Time";
pub const CPU_INFO: &str = "CPU Info";
pub const MEMORY_USAGE: &str = "Memory Usage";
pub const DISK_USAGE: &str = "Disk Usage";
pub const GPU_USAGE: &str = "GPU Usage";
pub const NETWORK_INFORMATION: &str = "Network Information";

pub const SECTION_ORDER: [&str; 7] = [
    SYSTEM_INFORMATION,
    BOOT_TIME,
    CPU_INFO,
    MEMORY_USAGE,
    DISK_USAGE,
    GPU_USAGE,
    NETWORK_INFORMATION,
];

/// Whether a section holds collected data or a diagnostic placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Complete,
    Degraded,
}

/// One collector's rendered output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSection {
    title: String,
    lines: Vec<String>,
    status: SectionStatus,
}

impl MetricSection {
    pub fn new<S: Into<String>>(title: S, lines: Vec<String>, status: SectionStatus) -> Self {
        Self {
            title: title.into(),
            lines,
            status,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn status(&self) -> SectionStatus {
        self.status
    }

    pub fn is_degraded(&self) -> bool {
        self.status == SectionStatus::Degraded
    }
}

/// The assembled report: sections in collection order
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    generated_at: DateTime<Local>,
    sections: Vec<MetricSection>,
}

impl Report {
    pub fn new(sections: Vec<MetricSection>) -> Self {
        Self {
            generated_at: Local::now(),
            sections,
        }
    }

    pub fn sections(&self) -> &[MetricSection] {
        &self.sections
    }

    pub fn section(&self, title: &str) -> Option<&MetricSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }

    /// Render as plain text: header, lines verbatim, blank line between sections
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("===== {} =====\n", section.title));
            for line in &section.lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(SysReportError::from)
    }
}

/// Result of running one collector
#[derive(Debug)]
pub enum CollectorOutcome {
    /// Section body built from live data
    Collected(Vec<String>),
    /// Failure absorbed by the collector; the lines are its diagnostic text
    Tolerated(Vec<String>),
    /// Failure the report cannot be built without
    Fatal(SysReportError),
}

/// Identity strings for the host, `uname` style
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnameInfo {
    pub system: String,
    pub node: String,
    pub release: String,
    pub version: String,
    pub machine: String,
    pub processor: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuFrequency {
    pub current_mhz: f64,
    pub min_mhz: f64,
    pub max_mhz: f64,
}

/// Virtual memory counters in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemorySnapshot {
    pub total: u64,
    pub available: u64,
    pub used: u64,
}

impl MemorySnapshot {
    /// Share of memory not available, to one decimal
    pub fn used_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let busy = self.total.saturating_sub(self.available) as f64;
        round_tenth(busy / self.total as f64 * 100.0)
    }
}

/// A mounted filesystem as listed by the OS
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub device: String,
    pub mountpoint: String,
    pub filesystem_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
}

impl PartitionUsage {
    /// `free` is space available to unprivileged users; percent is used / (used + free)
    pub fn new(total: u64, used: u64, free: u64) -> Self {
        let denominator = used.saturating_add(free);
        let percent = if denominator == 0 {
            0.0
        } else {
            round_tenth(used as f64 / denominator as f64 * 100.0)
        };

        Self {
            total,
            used,
            free,
            percent,
        }
    }
}

/// A partition plus its usage, if the usage query succeeded
#[derive(Debug, Clone, PartialEq)]
pub struct DiskPartitionEntry {
    pub device: String,
    pub mountpoint: String,
    pub filesystem_type: String,
    pub usage: Option<PartitionUsage>,
}

/// Cumulative bytes moved by all disks since boot
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiskIoCounters {
    pub read_bytes: u64,
    pub write_bytes: u64,
}

/// One row of the GPU query, fields verbatim as the tool printed them.
///
/// Memory stays in MiB. Fields may hold `[N/A]` or `[Not Supported]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuDeviceEntry {
    pub name: String,
    pub utilization_percent: String,
    pub memory_total_mib: String,
    pub memory_used_mib: String,
}
