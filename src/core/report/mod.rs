//! Report collection and assembly.
//!
//! Each metric domain has a collector behind the [`MetricCollector`] trait and
//! a source trait for the OS capability it reads. The [`ReportAggregator`]
//! runs the collectors in order and builds the [`Report`].

mod collector;
pub mod cpu;
pub mod disk;
pub mod gpu;
pub mod memory;
pub mod network;
pub mod platform;
mod types;

pub use collector::{MetricCollector, ReportAggregator};
pub use cpu::{CpuCollector, CpuSource};
pub use disk::{DiskCollector, DiskSource};
pub use gpu::{parse_gpu_row, parse_gpu_rows, GpuCollector, GpuQuery, GPU_UNAVAILABLE};
pub use memory::{MemoryCollector, MemorySource};
pub use network::{NetworkCollector, NETWORK_REDACTION_NOTICE};
pub use platform::{BootTimeCollector, PlatformCollector, PlatformSource};
pub use types::*;
