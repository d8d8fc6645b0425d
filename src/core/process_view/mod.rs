//! Process list filtering and ranking.
//!
//! Takes a process snapshot plus the active filter, search, sort and pin
//! state and produces the ordered list shown by the process view. Both
//! stages are pure apart from the compiled-pattern cache.

mod filter_config;
mod pins;
mod pipeline;
pub mod predicate;
pub mod ranking;
mod record;
mod regex_cache;
mod search;
mod sort_config;
pub mod text_order;

pub use filter_config::{ComparisonOperator, FilterConfig, NumericClause, StatusClause};
pub use pins::PinSet;
pub use pipeline::{build_view, ProcessView};
pub use predicate::{filter, Filtered};
pub use ranking::{compare_disk_usage, compare_field, compare_records, sort};
pub use record::{DiskUsage, ProcessRecord, ProcessStatus};
pub use regex_cache::{RegexCache, DEFAULT_REGEX_CACHE_CAPACITY};
pub use search::{SearchQuery, SearchTerm};
pub use sort_config::{SortConfig, SortDirection, SortField};
