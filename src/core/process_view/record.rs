use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProcviewError, Result};

/// One snapshot-instant view of an OS process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    /// Stable identity used for pinning; may repeat across snapshots
    pub command: String,
    pub status: ProcessStatus,
    pub cpu_usage: f64,    // percent
    pub memory_usage: u64, // bytes
    pub run_time: u64,     // seconds
    #[serde(default)]
    pub disk_usage: DiskUsage,
}

/// Cumulative disk I/O counters of a process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskUsage {
    pub read_bytes: u64,
    pub written_bytes: u64,
}

impl DiskUsage {
    pub fn new(read_bytes: u64, written_bytes: u64) -> Self {
        Self {
            read_bytes,
            written_bytes,
        }
    }

    pub fn total(&self) -> u128 {
        self.read_bytes as u128 + self.written_bytes as u128
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProcessStatus {
    Running,
    Sleeping,
    Stopped,
    Zombie,
}

impl ProcessStatus {
    pub fn all() -> [ProcessStatus; 4] {
        [
            ProcessStatus::Running,
            ProcessStatus::Sleeping,
            ProcessStatus::Stopped,
            ProcessStatus::Zombie,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProcessStatus::Running => "Running",
            ProcessStatus::Sleeping => "Sleeping",
            ProcessStatus::Stopped => "Stopped",
            ProcessStatus::Zombie => "Zombie",
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessStatus {
    type Err = ProcviewError;

    fn from_str(s: &str) -> Result<Self> {
        ProcessStatus::all()
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProcviewError::invalid_status(s))
    }
}
