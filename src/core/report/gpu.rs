use log::warn;

use crate::error::{Result, SysReportError};

use super::collector::MetricCollector;
use super::types::{CollectorOutcome, GpuDeviceEntry, GPU_USAGE};

/// Diagnostic shown in place of GPU data when the query fails
pub const GPU_UNAVAILABLE: &str = "nvidia-smi not available or failed; skipping GPU info.";

/// Trait for GPU query backends
///
/// Returns one raw CSV row per device:
/// `name, utilization.gpu, memory.total, memory.used`.
pub trait GpuQuery {
    fn query_gpus(&mut self) -> Result<Vec<String>>;
}

/// Split one `name, util, total, used` row into trimmed fields.
///
/// Only the field count is checked; values such as `[N/A]` are kept as printed.
pub fn parse_gpu_row(row: &str) -> Result<GpuDeviceEntry> {
    let fields: Vec<&str> = row.split(',').map(|f| f.trim()).collect();

    let [name, util, total, used] = fields.as_slice() else {
        return Err(SysReportError::gpu_query(format!(
            "expected 4 fields, got {}: {:?}",
            fields.len(),
            row
        )));
    };

    Ok(GpuDeviceEntry {
        name: name.to_string(),
        utilization_percent: util.to_string(),
        memory_total_mib: total.to_string(),
        memory_used_mib: used.to_string(),
    })
}

/// Parse every non-blank row; one row with the wrong field count fails the whole query
pub fn parse_gpu_rows<S: AsRef<str>>(rows: &[S]) -> Result<Vec<GpuDeviceEntry>> {
    rows.iter()
        .map(|r| r.as_ref())
        .filter(|r| !r.trim().is_empty())
        .map(parse_gpu_row)
        .collect()
}

pub struct GpuCollector<Q> {
    query: Q,
}

impl<Q: GpuQuery> GpuCollector<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    pub fn devices(&mut self) -> Result<Vec<GpuDeviceEntry>> {
        let rows = self.query.query_gpus()?;
        parse_gpu_rows(&rows)
    }
}

impl<Q: GpuQuery> MetricCollector for GpuCollector<Q> {
    fn title(&self) -> &'static str {
        GPU_USAGE
    }

    fn collect(&mut self) -> CollectorOutcome {
        let devices = match self.devices() {
            Ok(devices) => devices,
            Err(e) => {
                warn!("GPU information unavailable: {}", e);
                return CollectorOutcome::Tolerated(vec![GPU_UNAVAILABLE.to_string()]);
            }
        };

        let mut lines = Vec::new();
        for (i, gpu) in devices.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(format!("Name:        {}", gpu.name));
            lines.push(format!("Utilization: {}%", gpu.utilization_percent));
            lines.push(format!(
                "Memory:      {}/{} MiB",
                gpu.memory_used_mib, gpu.memory_total_mib
            ));
        }

        CollectorOutcome::Collected(lines)
    }
}
