use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::process_view::{
    FilterConfig, PinSet, SearchQuery, SortConfig, DEFAULT_REGEX_CACHE_CAPACITY,
};

/// Initial state of a process view, loaded from a JSON preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub filter: FilterConfig,
    /// Raw comma-separated search text
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: SortConfig,
    /// Pinned commands
    #[serde(default)]
    pub pinned: PinSet,
    #[serde(default = "default_regex_cache_capacity")]
    pub regex_cache_capacity: usize,
}

fn default_regex_cache_capacity() -> usize {
    DEFAULT_REGEX_CACHE_CAPACITY
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            search: String::new(),
            sort: SortConfig::default(),
            pinned: PinSet::default(),
            regex_cache_capacity: DEFAULT_REGEX_CACHE_CAPACITY,
        }
    }
}

impl ViewConfig {
    /// Load a preset. A missing path is an error; an empty file yields the default.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read view config: {:?}", path))?;

        if data.trim().is_empty() {
            log::debug!("View config {:?} is empty, using defaults", path);
            return Ok(Self::default());
        }

        Self::from_json(&data).with_context(|| format!("Invalid view config: {:?}", path))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse view config JSON")
    }

    pub fn search_query(&self) -> SearchQuery {
        SearchQuery::parse(&self.search)
    }
}
