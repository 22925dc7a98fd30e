//! GPU query through the `nvidia-smi` executable.
//!
//! Asks for one CSV row per device with name, utilization and memory
//! (MiB, no header, no units). The process is bounded by a timeout and
//! killed if it does not exit in time.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::core::report::GpuQuery;
use crate::error::{Result, SysReportError};

/// Query arguments passed to `nvidia-smi`
pub const NVIDIA_SMI_ARGS: [&str; 2] = [
    "--query-gpu=name,utilization.gpu,memory.total,memory.used",
    "--format=csv,noheader,nounits",
];

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Live [`GpuQuery`] that runs `nvidia-smi`
#[derive(Debug, Clone)]
pub struct NvidiaSmi {
    program: String,
    timeout: Duration,
}

impl NvidiaSmi {
    pub fn new<S: Into<String>>(program: S, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    fn resolve(&self) -> Result<PathBuf> {
        which::which(&self.program)
            .map_err(|e| SysReportError::gpu_query(format!("{} not found: {}", self.program, e)))
    }

    /// Run the query and return its stdout
    fn run(&self) -> Result<String> {
        let program = self.resolve()?;
        debug!("Running {} {}", program.display(), NVIDIA_SMI_ARGS.join(" "));

        let mut child = Command::new(&program)
            .args(NVIDIA_SMI_ARGS)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                SysReportError::gpu_query(format!("failed to start {}: {}", program.display(), e))
            })?;

        // Drain stdout concurrently so a full pipe cannot stall the child
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| SysReportError::gpu_query("stdout was not captured"))?;
        let reader = thread::spawn(move || {
            let mut buf = Vec::new();
            stdout.read_to_end(&mut buf).map(|_| buf)
        });

        let started = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if started.elapsed() >= self.timeout => {
                    reap(&mut child);
                    return Err(SysReportError::gpu_query(format!(
                        "{} timed out after {:?}",
                        program.display(),
                        self.timeout
                    )));
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    reap(&mut child);
                    return Err(SysReportError::gpu_query(format!(
                        "failed to wait on {}: {}",
                        program.display(),
                        e
                    )));
                }
            }
        };

        let output = reader
            .join()
            .map_err(|_| SysReportError::gpu_query("stdout reader panicked"))??;

        if !status.success() {
            return Err(SysReportError::gpu_query(format!(
                "{} exited with {}",
                program.display(),
                status
            )));
        }

        String::from_utf8(output)
            .map_err(|e| SysReportError::gpu_query(format!("output is not UTF-8: {}", e)))
    }
}

/// Kill the child and collect its exit status so no zombie is left behind
fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

impl GpuQuery for NvidiaSmi {
    fn query_gpus(&mut self) -> Result<Vec<String>> {
        let stdout = self.run()?;
        Ok(stdout.lines().map(|line| line.to_string()).collect())
    }
}
