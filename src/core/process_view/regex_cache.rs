//! Bounded cache of compiled search patterns.
//!
//! The same search terms are evaluated against every process on every
//! refresh tick, so compiled patterns are kept between calls. Failed
//! compilations are cached too; a malformed term is compiled once per
//! residency and then simply never matches.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;
use regex::{Regex, RegexBuilder};

pub const DEFAULT_REGEX_CACHE_CAPACITY: usize = 256;

/// `None` records a pattern that failed to compile
type CachedPattern = Option<Arc<Regex>>;

#[derive(Debug)]
pub struct RegexCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

#[derive(Debug, Default)]
struct CacheInner {
    patterns: HashMap<String, CachedPattern>,
    insertion_order: VecDeque<String>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_REGEX_CACHE_CAPACITY)
    }

    /// A capacity of zero disables caching; every lookup compiles afresh.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(CacheInner::default()),
        }
    }

    /// Case-insensitive pattern for `term`, or `None` if it is not a valid regex
    pub fn get_or_compile(&self, term: &str) -> CachedPattern {
        let mut inner = self.inner.lock();
        if let Some(cached) = inner.patterns.get(term) {
            return cached.clone();
        }

        let compiled = compile(term);
        if self.capacity == 0 {
            return compiled;
        }

        if inner.patterns.len() >= self.capacity {
            if let Some(oldest) = inner.insertion_order.pop_front() {
                log::trace!("Evicting cached search pattern {:?}", oldest);
                inner.patterns.remove(&oldest);
            }
        }
        inner.insertion_order.push_back(term.to_string());
        inner.patterns.insert(term.to_string(), compiled.clone());

        compiled
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.inner.lock().patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.patterns.clear();
        inner.insertion_order.clear();
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(term: &str) -> CachedPattern {
    match RegexBuilder::new(term).case_insensitive(true).build() {
        Ok(regex) => Some(Arc::new(regex)),
        Err(e) => {
            log::debug!("Ignoring malformed search pattern {:?}: {}", term, e);
            None
        }
    }
}
