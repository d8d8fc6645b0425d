use anyhow::Result;
use colored::*;

use crate::core::process_view::SortField;

/// List the sortable fields accepted by `--sort`
pub fn execute() -> Result<()> {
    println!("{}", "Sortable fields:".bold());
    for field in SortField::all() {
        let name = format!("{:<14}", field.as_str());
        println!("  {} {}", name.as_str().cyan(), describe(field));
    }
    Ok(())
}

fn describe(field: SortField) -> &'static str {
    match field {
        SortField::Pid => "process id",
        SortField::Name => "display name",
        SortField::Command => "command line (pin identity)",
        SortField::Status => "Running, Sleeping, Stopped or Zombie",
        SortField::CpuUsage => "CPU usage in percent (alias: cpu)",
        SortField::MemoryUsage => "resident memory (aliases: memory, ram)",
        SortField::RunTime => "time since start (alias: runtime)",
        SortField::DiskUsage => "disk read/write, dominant operation first (alias: disk)",
    }
}
