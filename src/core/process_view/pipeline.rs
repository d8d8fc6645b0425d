//! Filter-then-rank pipeline run on every refresh tick.

use super::filter_config::FilterConfig;
use super::pins::PinSet;
use super::predicate::filter;
use super::ranking::sort;
use super::record::ProcessRecord;
use super::regex_cache::RegexCache;
use super::search::SearchQuery;
use super::sort_config::SortConfig;
use crate::core::config::ViewConfig;

/// Filter `snapshot`, then order the survivors with pinned processes first
pub fn build_view<'a>(
    snapshot: &'a [ProcessRecord],
    query: &SearchQuery,
    filter_config: &FilterConfig,
    sort_config: &SortConfig,
    pinned: &PinSet,
    cache: &RegexCache,
) -> Vec<&'a ProcessRecord> {
    let filtered = filter(snapshot, query, filter_config, cache);
    sort(filtered.iter(), sort_config, pinned)
}

/// View state owned by the process list: current filters, search, sort,
/// pins and the pattern cache shared by every refresh.
#[derive(Debug)]
pub struct ProcessView {
    filter: FilterConfig,
    query: SearchQuery,
    sort: SortConfig,
    pinned: PinSet,
    cache: RegexCache,
}

impl ProcessView {
    pub fn new(config: ViewConfig) -> Self {
        let query = config.search_query();
        Self {
            filter: config.filter,
            query,
            sort: config.sort,
            pinned: config.pinned,
            cache: RegexCache::with_capacity(config.regex_cache_capacity),
        }
    }

    /// Ordered view of a freshly supplied snapshot
    pub fn refresh<'a>(&self, snapshot: &'a [ProcessRecord]) -> Vec<&'a ProcessRecord> {
        build_view(
            snapshot,
            &self.query,
            &self.filter,
            &self.sort,
            &self.pinned,
            &self.cache,
        )
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: FilterConfig) {
        self.filter = filter;
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn set_search(&mut self, raw: &str) {
        self.query = SearchQuery::parse(raw);
    }

    pub fn sort_config(&self) -> &SortConfig {
        &self.sort
    }

    pub fn set_sort(&mut self, sort: SortConfig) {
        self.sort = sort;
    }

    pub fn pins(&self) -> &PinSet {
        &self.pinned
    }

    pub fn pins_mut(&mut self) -> &mut PinSet {
        &mut self.pinned
    }

    pub fn regex_cache(&self) -> &RegexCache {
        &self.cache
    }
}

impl Default for ProcessView {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}
