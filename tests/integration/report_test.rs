use std::io;
use std::time::Duration;

use sysreport::core::report::{
    BootTimeCollector, CpuCollector, CpuFrequency, CpuSource, DiskCollector, DiskIoCounters,
    DiskSource, GpuCollector, GpuQuery, MemoryCollector, MemorySnapshot, MemorySource,
    NetworkCollector, Partition, PartitionUsage, PlatformCollector, PlatformSource,
    ReportAggregator, SectionStatus, UnameInfo, GPU_UNAVAILABLE, NETWORK_REDACTION_NOTICE,
    SECTION_ORDER,
};
use sysreport::{Result, SysReportError};

#[derive(Clone, Copy)]
struct FakePlatform {
    broken: bool,
}

impl PlatformSource for FakePlatform {
    fn uname(&self) -> Result<UnameInfo> {
        if self.broken {
            return Err(SysReportError::platform("uname unavailable"));
        }
        Ok(UnameInfo {
            system: "Linux".into(),
            node: "lab-7".into(),
            release: "6.8.0".into(),
            version: "#42-Ubuntu SMP".into(),
            machine: "x86_64".into(),
            processor: "Intel(R) Xeon(R)".into(),
        })
    }

    fn boot_time(&self) -> Result<u64> {
        Ok(1_690_000_000)
    }
}

struct FakeCpu;

impl CpuSource for FakeCpu {
    fn physical_cores(&self) -> Option<usize> {
        Some(1)
    }

    fn logical_cores(&self) -> usize {
        2
    }

    fn frequency(&mut self) -> CpuFrequency {
        CpuFrequency {
            current_mhz: 3000.0,
            min_mhz: 1000.0,
            max_mhz: 3500.0,
        }
    }

    fn per_core_usage(&mut self, _window: Duration) -> Vec<f32> {
        vec![12.5, 50.0]
    }

    fn total_usage(&mut self) -> f32 {
        31.2
    }
}

struct FakeMemory;

impl MemorySource for FakeMemory {
    fn virtual_memory(&mut self) -> MemorySnapshot {
        MemorySnapshot {
            total: 8 * 1024 * 1024 * 1024,
            available: 2 * 1024 * 1024 * 1024,
            used: 5 * 1024 * 1024 * 1024,
        }
    }
}

struct FakeDisks;

impl DiskSource for FakeDisks {
    fn partitions(&mut self) -> Vec<Partition> {
        vec![
            Partition {
                device: "/dev/nvme0n1p2".into(),
                mountpoint: "/".into(),
                filesystem_type: "ext4".into(),
            },
            Partition {
                device: "/dev/nvme0n1p3".into(),
                mountpoint: "/srv/private".into(),
                filesystem_type: "xfs".into(),
            },
        ]
    }

    fn usage(&self, mountpoint: &str) -> io::Result<PartitionUsage> {
        if mountpoint == "/srv/private" {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        Ok(PartitionUsage::new(1024 * 1024 * 1024, 512 * 1024 * 1024, 512 * 1024 * 1024))
    }

    fn io_counters(&mut self) -> Option<DiskIoCounters> {
        Some(DiskIoCounters {
            read_bytes: 3 * 1024 * 1024,
            write_bytes: 1536,
        })
    }
}

enum FakeGpu {
    Missing,
    Output(&'static str),
}

impl GpuQuery for FakeGpu {
    fn query_gpus(&mut self) -> Result<Vec<String>> {
        match self {
            FakeGpu::Missing => Err(SysReportError::gpu_query("nvidia-smi: not found")),
            FakeGpu::Output(out) => Ok(out.lines().map(String::from).collect()),
        }
    }
}

fn aggregator(platform: FakePlatform, gpu: FakeGpu) -> ReportAggregator {
    let mut aggregator = ReportAggregator::new();
    aggregator
        .register(Box::new(PlatformCollector::new(platform)))
        .register(Box::new(BootTimeCollector::new(platform)))
        .register(Box::new(CpuCollector::new(FakeCpu, Duration::ZERO)))
        .register(Box::new(MemoryCollector::new(FakeMemory)))
        .register(Box::new(DiskCollector::new(FakeDisks)))
        .register(Box::new(GpuCollector::new(gpu)))
        .register(Box::new(NetworkCollector));
    aggregator
}

#[test]
fn test_full_report_section_order() {
    let report = aggregator(
        FakePlatform { broken: false },
        FakeGpu::Output("NVIDIA X, 42, 8192, 4096\n"),
    )
    .build_report()
    .unwrap();

    assert_eq!(report.titles(), SECTION_ORDER);
    assert!(report.sections().iter().all(|s| s.status() == SectionStatus::Complete));
}

#[test]
fn test_section_order_holds_when_gpu_is_missing() {
    let report = aggregator(FakePlatform { broken: false }, FakeGpu::Missing)
        .build_report()
        .unwrap();

    assert_eq!(report.titles(), SECTION_ORDER);

    let gpu = report.section("GPU Usage").unwrap();
    assert_eq!(gpu.lines(), [GPU_UNAVAILABLE.to_string()]);
    assert!(gpu.is_degraded());
}

#[test]
fn test_gpu_block_rendering() {
    let text = aggregator(
        FakePlatform { broken: false },
        FakeGpu::Output("NVIDIA X, 42, 8192, 4096\n"),
    )
    .build_report()
    .unwrap()
    .render_text();

    assert!(text.contains(
        "===== GPU Usage =====\n\
         Name:        NVIDIA X\n\
         Utilization: 42%\n\
         Memory:      4096/8192 MiB\n\
         \n\
         ===== Network Information ====="
    ));
}

#[test]
fn test_permission_denied_partition_keeps_header() {
    let report = aggregator(FakePlatform { broken: false }, FakeGpu::Missing)
        .build_report()
        .unwrap();

    let disk = report.section("Disk Usage").unwrap();
    let lines = disk.lines();

    let header = "[/dev/nvme0n1p3 mounted on /srv/private (xfs)]";
    let idx = lines.iter().position(|l| l == header).unwrap();
    assert_eq!(lines[idx + 1], "Disk I/O — Read: 3.00MB, Write: 1.50KB");

    assert_eq!(lines[0], "[/dev/nvme0n1p2 mounted on / (ext4)]");
    assert_eq!(lines[1], "  Total: 1.00GB");
    assert_eq!(lines[4], "  Percent: 50.0%");
}

#[test]
fn test_network_section_is_redacted() {
    let report = aggregator(FakePlatform { broken: false }, FakeGpu::Missing)
        .build_report()
        .unwrap();

    let network = report.section("Network Information").unwrap();
    assert_eq!(network.lines(), [NETWORK_REDACTION_NOTICE.to_string()]);
    assert!(report
        .render_text()
        .ends_with("\n\n===== Network Information =====\n**omitted due to security restrictions**\n"));
}

#[test]
fn test_platform_failure_aborts_report() {
    let err = aggregator(FakePlatform { broken: true }, FakeGpu::Missing)
        .build_report()
        .unwrap_err();

    assert!(matches!(
        err,
        SysReportError::Collector { ref section, .. } if section == "System Information"
    ));
    assert!(err.to_string().contains("System Information"));
}

#[test]
fn test_text_report_starts_with_identity() {
    let text = aggregator(FakePlatform { broken: false }, FakeGpu::Missing)
        .build_report()
        .unwrap()
        .render_text();

    assert!(text.starts_with(
        "===== System Information =====\n\
         System: Linux\n\
         Node Name: lab-7\n"
    ));
    assert!(text.contains("Total cores:    2\n"));
    assert!(text.contains("  Core 1: 50.0%\n"));
    assert!(text.contains("Percent:   75.0%\n"));
}
