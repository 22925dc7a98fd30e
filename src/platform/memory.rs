use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use crate::core::report::{MemorySnapshot, MemorySource};

/// Live [`MemorySource`] backed by sysinfo
pub struct SysinfoMemory {
    system: System,
}

impl SysinfoMemory {
    pub fn new() -> Self {
        let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::everything());
        Self {
            system: System::new_with_specifics(refresh),
        }
    }
}

impl Default for SysinfoMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySource for SysinfoMemory {
    fn virtual_memory(&mut self) -> MemorySnapshot {
        self.system.refresh_memory();

        MemorySnapshot {
            total: self.system.total_memory(),
            available: self.system.available_memory(),
            used: self.system.used_memory(),
        }
    }
}
