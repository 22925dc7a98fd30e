// Host identity and boot time

use sysinfo::{CpuRefreshKind, RefreshKind, System};

use crate::core::report::{PlatformSource, UnameInfo};
use crate::error::{Result, SysReportError};

/// Live [`PlatformSource`]: `uname(2)` via nix on Unix, sysinfo elsewhere
#[derive(Debug, Default, Clone, Copy)]
pub struct HostPlatform;

impl HostPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformSource for HostPlatform {
    fn uname(&self) -> Result<UnameInfo> {
        let mut info = os_identity()?;
        info.processor = cpu_brand().unwrap_or_else(|| info.machine.clone());
        Ok(info)
    }

    fn boot_time(&self) -> Result<u64> {
        match System::boot_time() {
            0 => Err(SysReportError::boot_time("the OS did not report a boot time")),
            secs => Ok(secs),
        }
    }
}

#[cfg(unix)]
fn os_identity() -> Result<UnameInfo> {
    let uts = nix::sys::utsname::uname()
        .map_err(|e| SysReportError::platform(format!("uname failed: {}", e)))?;

    Ok(UnameInfo {
        system: uts.sysname().to_string_lossy().into_owned(),
        node: uts.nodename().to_string_lossy().into_owned(),
        release: uts.release().to_string_lossy().into_owned(),
        version: uts.version().to_string_lossy().into_owned(),
        machine: uts.machine().to_string_lossy().into_owned(),
        processor: String::new(),
    })
}

#[cfg(not(unix))]
fn os_identity() -> Result<UnameInfo> {
    let system = System::name()
        .ok_or_else(|| SysReportError::platform("the OS did not report its name"))?;

    Ok(UnameInfo {
        system,
        node: System::host_name().unwrap_or_default(),
        release: System::kernel_version().unwrap_or_default(),
        version: System::os_version().unwrap_or_default(),
        machine: std::env::consts::ARCH.to_string(),
        processor: String::new(),
    })
}

fn cpu_brand() -> Option<String> {
    let sys = System::new_with_specifics(
        RefreshKind::nothing().with_cpu(CpuRefreshKind::everything()),
    );
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|brand| !brand.is_empty())
}
