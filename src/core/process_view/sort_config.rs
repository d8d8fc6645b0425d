use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProcviewError, Result};

/// Sortable process attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Pid,
    Name,
    Command,
    Status,
    CpuUsage,
    MemoryUsage,
    RunTime,
    DiskUsage,
}

impl SortField {
    pub fn all() -> [SortField; 8] {
        [
            SortField::Pid,
            SortField::Name,
            SortField::Command,
            SortField::Status,
            SortField::CpuUsage,
            SortField::MemoryUsage,
            SortField::RunTime,
            SortField::DiskUsage,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Pid => "pid",
            SortField::Name => "name",
            SortField::Command => "command",
            SortField::Status => "status",
            SortField::CpuUsage => "cpu_usage",
            SortField::MemoryUsage => "memory_usage",
            SortField::RunTime => "run_time",
            SortField::DiskUsage => "disk_usage",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ProcviewError;

    fn from_str(s: &str) -> Result<Self> {
        let field = match s.trim().to_ascii_lowercase().as_str() {
            "pid" => SortField::Pid,
            "name" => SortField::Name,
            "command" | "cmd" => SortField::Command,
            "status" => SortField::Status,
            "cpu_usage" | "cpu" => SortField::CpuUsage,
            "memory_usage" | "memory" | "ram" | "mem" => SortField::MemoryUsage,
            "run_time" | "runtime" => SortField::RunTime,
            "disk_usage" | "disk" => SortField::DiskUsage,
            _ => return Err(ProcviewError::invalid_sort_field(s)),
        };
        Ok(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = ProcviewError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(ProcviewError::invalid_sort_direction(s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: SortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: SortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Same field, or flip direction when the field is already selected
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.reversed())
        } else {
            Self::new(field, self.direction)
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::desc(SortField::CpuUsage)
    }
}
