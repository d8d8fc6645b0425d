//! Process filtering.
//!
//! Evaluates each record against the status set, the numeric thresholds and
//! the comma-separated search terms. The result preserves snapshot order.

use std::slice;
use std::sync::Arc;

use regex::Regex;

use super::filter_config::FilterConfig;
use super::record::ProcessRecord;
use super::regex_cache::RegexCache;
use super::search::{SearchQuery, SearchTerm};

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Output of [`filter`]: either the untouched snapshot or the matching subset
#[derive(Debug, Clone)]
pub enum Filtered<'a> {
    /// No search terms and no active clause; nothing was evaluated
    Unfiltered(&'a [ProcessRecord]),
    Matched(Vec<&'a ProcessRecord>),
}

impl<'a> Filtered<'a> {
    pub fn len(&self) -> usize {
        match self {
            Filtered::Unfiltered(all) => all.len(),
            Filtered::Matched(matched) => matched.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_unfiltered(&self) -> bool {
        matches!(self, Filtered::Unfiltered(_))
    }

    pub fn iter(&self) -> FilteredIter<'_, 'a> {
        match *self {
            Filtered::Unfiltered(all) => FilteredIter::All(all.iter()),
            Filtered::Matched(ref matched) => FilteredIter::Matched(matched.iter()),
        }
    }

    pub fn to_vec(&self) -> Vec<&'a ProcessRecord> {
        self.iter().collect()
    }
}

pub enum FilteredIter<'s, 'a> {
    All(slice::Iter<'a, ProcessRecord>),
    Matched(slice::Iter<'s, &'a ProcessRecord>),
}

impl<'s, 'a> Iterator for FilteredIter<'s, 'a> {
    type Item = &'a ProcessRecord;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            FilteredIter::All(iter) => iter.next(),
            FilteredIter::Matched(iter) => iter.next().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            FilteredIter::All(iter) => iter.size_hint(),
            FilteredIter::Matched(iter) => iter.size_hint(),
        }
    }
}

/// A search term with its pattern resolved from the cache once per call
struct CompiledTerm<'q> {
    term: &'q SearchTerm,
    regex: Option<Arc<Regex>>,
}

/// Keep the records that pass every active clause and match at least one search term
pub fn filter<'a>(
    processes: &'a [ProcessRecord],
    query: &SearchQuery,
    config: &FilterConfig,
    cache: &RegexCache,
) -> Filtered<'a> {
    if query.is_empty() && !config.has_active_clause() {
        log::trace!("No active filters, passing {} processes through", processes.len());
        return Filtered::Unfiltered(processes);
    }

    let terms: Vec<CompiledTerm<'_>> = query
        .terms()
        .iter()
        .map(|term| CompiledTerm {
            term,
            regex: cache.get_or_compile(term.raw()),
        })
        .collect();

    let matched: Vec<&ProcessRecord> = processes
        .iter()
        .filter(|record| passes_clauses(record, config) && matches_search(record, &terms))
        .collect();

    log::debug!(
        "Filtered {} of {} processes ({} search terms)",
        matched.len(),
        processes.len(),
        terms.len()
    );

    Filtered::Matched(matched)
}

/// Status, cpu, ram and runtime clauses, in that order
pub fn passes_clauses(record: &ProcessRecord, config: &FilterConfig) -> bool {
    config.status.accepts(record.status)
        && config.cpu.accepts(record.cpu_usage)
        && config.ram.accepts(ram_mib(record))
        && config.runtime.accepts(runtime_minutes(record))
}

/// Memory usage in MiB, as compared by the ram clause
pub fn ram_mib(record: &ProcessRecord) -> f64 {
    record.memory_usage as f64 / BYTES_PER_MIB
}

/// Run time in minutes, as compared by the runtime clause
pub fn runtime_minutes(record: &ProcessRecord) -> f64 {
    record.run_time as f64 / SECONDS_PER_MINUTE
}

fn matches_search(record: &ProcessRecord, terms: &[CompiledTerm<'_>]) -> bool {
    if terms.is_empty() {
        return true;
    }

    let name = record.name.to_lowercase();
    let command = record.command.to_lowercase();
    let pid = record.pid.to_string();

    terms.iter().any(|compiled| {
        let term = compiled.term;
        name.contains(term.lowered())
            || command.contains(term.lowered())
            || pid.contains(term.raw())
            || compiled
                .regex
                .as_ref()
                .is_some_and(|regex| regex.is_match(&record.name))
    })
}
