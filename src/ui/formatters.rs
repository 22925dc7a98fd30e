use chrono::{Local, TimeZone};

use crate::error::{Result, SysReportError};

const SIZE_FACTOR: f64 = 1024.0;
const SIZE_UNITS: [&str; 6] = ["", "K", "M", "G", "T", "P"];

/// Format a byte count in human-readable form (B, KB, MB, GB, TB, PB)
///
/// Scales by 1024 until the value drops below 1024 or the ladder tops out
/// at `P`. Always two decimals, e.g. `1536.0` -> `"1.50KB"`.
pub fn format_size(bytes: f64) -> String {
    let mut value = bytes;
    let mut unit = 0;

    while value >= SIZE_FACTOR && unit < SIZE_UNITS.len() - 1 {
        value /= SIZE_FACTOR;
        unit += 1;
    }

    format!("{:.2}{}B", value, SIZE_UNITS[unit])
}

/// Format a boot timestamp (seconds since the Unix epoch) as local `YYYY-MM-DD HH:MM:SS`
pub fn format_boot_time(epoch_secs: u64) -> Result<String> {
    let secs = i64::try_from(epoch_secs)
        .map_err(|_| SysReportError::boot_time(format!("timestamp {} out of range", epoch_secs)))?;

    let datetime = Local
        .timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| SysReportError::boot_time(format!("invalid timestamp {}", epoch_secs)))?;

    Ok(datetime.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Round a percentage to one decimal place
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
