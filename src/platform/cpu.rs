use std::time::Duration;

use sysinfo::{CpuRefreshKind, RefreshKind, System, MINIMUM_CPU_UPDATE_INTERVAL};

use crate::core::report::{CpuFrequency, CpuSource};

/// Live [`CpuSource`] backed by sysinfo
pub struct SysinfoCpu {
    system: System,
}

impl SysinfoCpu {
    pub fn new() -> Self {
        let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::everything());
        Self {
            system: System::new_with_specifics(refresh),
        }
    }
}

impl Default for SysinfoCpu {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuSource for SysinfoCpu {
    fn physical_cores(&self) -> Option<usize> {
        System::physical_core_count()
    }

    fn logical_cores(&self) -> usize {
        self.system.cpus().len()
    }

    fn frequency(&mut self) -> CpuFrequency {
        self.system.refresh_cpu_frequency();

        let cpus = self.system.cpus();
        let current_mhz = if cpus.is_empty() {
            0.0
        } else {
            cpus.iter().map(|cpu| cpu.frequency() as f64).sum::<f64>() / cpus.len() as f64
        };

        CpuFrequency {
            current_mhz,
            min_mhz: cpufreq_mhz("cpuinfo_min_freq").unwrap_or(0.0),
            max_mhz: cpufreq_mhz("cpuinfo_max_freq").unwrap_or(0.0),
        }
    }

    fn per_core_usage(&mut self, window: Duration) -> Vec<f32> {
        // Usage is a delta between two refreshes; sysinfo needs a minimum gap
        self.system.refresh_cpu_usage();
        std::thread::sleep(window.max(MINIMUM_CPU_UPDATE_INTERVAL));
        self.system.refresh_cpu_usage();

        self.system.cpus().iter().map(|cpu| cpu.cpu_usage()).collect()
    }

    fn total_usage(&mut self) -> f32 {
        self.system.refresh_cpu_usage();
        self.system.global_cpu_usage()
    }
}

/// Read a cpufreq limit for cpu0 (kHz in sysfs) as MHz
#[cfg(target_os = "linux")]
fn cpufreq_mhz(name: &str) -> Option<f64> {
    let path = format!("/sys/devices/system/cpu/cpu0/cpufreq/{}", name);
    let khz: f64 = std::fs::read_to_string(path).ok()?.trim().parse().ok()?;
    Some(khz / 1000.0)
}

#[cfg(not(target_os = "linux"))]
fn cpufreq_mhz(_name: &str) -> Option<f64> {
    None
}
