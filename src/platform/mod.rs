// Platform-specific code module: live sources for the report collectors

pub mod cpu;
pub mod disks;
pub mod host;
pub mod memory;
pub mod nvidia_smi;

// Re-exports for cleaner imports
pub use cpu::SysinfoCpu;
pub use disks::HostDisks;
pub use host::HostPlatform;
pub use memory::SysinfoMemory;
pub use nvidia_smi::{NvidiaSmi, NVIDIA_SMI_ARGS};
