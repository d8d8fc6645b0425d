use humansize::{format_size, BINARY};

use crate::core::process_view::DiskUsage;

/// Format a byte count in binary units (KiB, MiB, GiB)
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, BINARY)
}

/// Format process run time in seconds as `1d 02h`, `3h 04m`, `5m 06s` or `7s`
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;

    if days > 0 {
        format!("{}d {:02}h", days, hours)
    } else if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_disk_usage(disk: &DiskUsage) -> String {
    format!(
        "R {} / W {}",
        format_bytes(disk.read_bytes),
        format_bytes(disk.written_bytes)
    )
}
