use procview::core::process_view::predicate::{ram_mib, runtime_minutes};
use procview::core::process_view::{
    filter, ComparisonOperator, FilterConfig, NumericClause, ProcessRecord, ProcessStatus,
    RegexCache, SearchQuery,
};

use super::common::{pids, record, sample_snapshot};

fn filtered_pids(
    snapshot: &[ProcessRecord],
    query: &str,
    config: &FilterConfig,
    cache: &RegexCache,
) -> Vec<u32> {
    pids(&filter(snapshot, &SearchQuery::parse(query), config, cache).to_vec())
}

/// Every element of `sub` appears in `all`, in the same relative order
fn is_subsequence(sub: &[u32], all: &[u32]) -> bool {
    let mut rest = all.iter();
    sub.iter().all(|pid| rest.any(|candidate| candidate == pid))
}

#[test]
fn test_no_op_filter_returns_snapshot_unchanged() {
    let snapshot = sample_snapshot();
    let cache = RegexCache::new();

    let filtered = filter(
        &snapshot,
        &SearchQuery::parse(""),
        &FilterConfig::default(),
        &cache,
    );

    assert!(filtered.is_unfiltered());
    let all: Vec<&ProcessRecord> = snapshot.iter().collect();
    assert_eq!(filtered.to_vec(), all);
}

#[test]
fn test_result_is_always_a_subsequence() {
    let snapshot = sample_snapshot();
    let all: Vec<u32> = snapshot.iter().map(|r| r.pid).collect();
    let cache = RegexCache::new();

    let configs = vec![
        FilterConfig::default(),
        FilterConfig::default().with_cpu(NumericClause::new(ComparisonOperator::Greater, 10.0)),
        FilterConfig::default().with_status_values([ProcessStatus::Sleeping]),
        FilterConfig::default()
            .with_ram(NumericClause::new(ComparisonOperator::LessOrEqual, 256.0)),
    ];
    let queries = ["", "chrome", "post, 42", "[", "^c.*r$"];

    for config in &configs {
        for query in queries {
            let result = filtered_pids(&snapshot, query, config, &cache);
            assert!(
                is_subsequence(&result, &all),
                "query {:?} produced {:?}",
                query,
                result
            );
        }
    }
}

#[test]
fn test_status_filter_partitions_snapshot() {
    let snapshot = sample_snapshot();
    let selected = [ProcessStatus::Running, ProcessStatus::Zombie];
    let config = FilterConfig::default().with_status_values(selected);

    let kept = filtered_pids(&snapshot, "", &config, &RegexCache::new());

    for record in &snapshot {
        let is_selected = selected.contains(&record.status);
        assert_eq!(kept.contains(&record.pid), is_selected, "pid {}", record.pid);
    }
}

#[test]
fn test_numeric_filters_use_unit_conversions() {
    let snapshot = sample_snapshot();
    let cache = RegexCache::new();

    let ram = NumericClause::new(ComparisonOperator::GreaterOrEqual, 256.0);
    let runtime = NumericClause::new(ComparisonOperator::LessOrEqual, 35.0);
    let config = FilterConfig::default()
        .with_ram(ram.clone())
        .with_runtime(runtime.clone());

    let kept = filtered_pids(&snapshot, "", &config, &cache);
    assert_eq!(kept, vec![230, 231, 500, 612]);

    for record in snapshot.iter().filter(|r| kept.contains(&r.pid)) {
        assert!(ram.operator.compare(ram_mib(record), ram.value));
        assert!(runtime.operator.compare(runtime_minutes(record), runtime.value));
    }
}

#[test]
fn test_equal_operator_on_exact_mib() {
    let mut exact = record(1, "exact", ProcessStatus::Running, 0.0);
    exact.memory_usage = 10 * 1024 * 1024;
    let mut off_by_one = record(2, "off", ProcessStatus::Running, 0.0);
    off_by_one.memory_usage = 10 * 1024 * 1024 - 1;
    let snapshot = vec![exact, off_by_one];

    let config =
        FilterConfig::default().with_ram(NumericClause::new(ComparisonOperator::Equal, 10.0));
    assert_eq!(
        filtered_pids(&snapshot, "", &config, &RegexCache::new()),
        vec![1]
    );
}

#[test]
fn test_search_terms_are_or_combined() {
    let snapshot = sample_snapshot();
    let cache = RegexCache::new();

    let postgres = filtered_pids(&snapshot, "postgres", &FilterConfig::default(), &cache);
    let fire = filtered_pids(&snapshot, "FIRE", &FilterConfig::default(), &cache);
    let both = filtered_pids(&snapshot, "postgres, FIRE", &FilterConfig::default(), &cache);

    assert_eq!(postgres, vec![230, 231]);
    assert_eq!(fire, vec![4242]);
    assert_eq!(both, vec![230, 231, 4242]);
}

#[test]
fn test_search_by_command_and_pid() {
    let snapshot = sample_snapshot();
    let cache = RegexCache::new();

    let by_command = filtered_pids(&snapshot, "postgresql", &FilterConfig::default(), &cache);
    assert_eq!(by_command, vec![231]);

    // "10" is a substring of pids 101 and 102
    let by_pid = filtered_pids(&snapshot, "10", &FilterConfig::default(), &cache);
    assert_eq!(by_pid, vec![101, 102]);
}

#[test]
fn test_regex_matches_name_only() {
    let snapshot = sample_snapshot();
    let cache = RegexCache::new();

    let anchored = filtered_pids(&snapshot, "^chrome$", &FilterConfig::default(), &cache);
    assert_eq!(anchored, vec![101]);

    // Regex is not applied to the command line
    let command_only = filtered_pids(
        &snapshot,
        "^/usr/lib/postgresql",
        &FilterConfig::default(),
        &cache,
    );
    assert!(command_only.is_empty());
}

#[test]
fn test_malformed_pattern_is_stable_across_calls() {
    let snapshot = sample_snapshot();
    let cache = RegexCache::new();

    let first = filtered_pids(&snapshot, "chrome(, backup", &FilterConfig::default(), &cache);
    for _ in 0..5 {
        let again = filtered_pids(&snapshot, "chrome(, backup", &FilterConfig::default(), &cache);
        assert_eq!(again, first);
    }
    assert_eq!(first, vec![612]);
}

#[test]
fn test_clauses_and_search_combine() {
    let snapshot = sample_snapshot();
    let config = FilterConfig::default()
        .with_status_values([ProcessStatus::Running])
        .with_cpu(NumericClause::new(ComparisonOperator::Greater, 15.0));

    let kept = filtered_pids(&snapshot, "chrome, post", &config, &RegexCache::new());
    assert_eq!(kept, vec![101, 231]);
}

#[test]
fn test_cpu_clause_uses_reported_percentage() {
    let snapshot: Vec<ProcessRecord> = serde_json::from_str(
        r#"[
            {"pid": 1, "name": "busy", "command": "/usr/bin/busy", "status": "Running",
             "cpu_usage": 50.1, "memory_usage": 0, "run_time": 0},
            {"pid": 2, "name": "quiet", "command": "/usr/bin/quiet", "status": "Running",
             "cpu_usage": 0.1, "memory_usage": 0, "run_time": 0}
        ]"#,
    )
    .unwrap();
    let cache = RegexCache::new();

    let cases = [
        (">=50.1", vec![1]),
        ("=50.1", vec![1]),
        ("<=50.1", vec![1, 2]),
        (">50.1", vec![]),
        ("=0.1", vec![2]),
        ("<=0.1", vec![2]),
    ];
    for (expression, expected) in cases {
        let clause = NumericClause::parse_expression(expression).unwrap();
        let config = FilterConfig::default().with_cpu(clause);
        assert_eq!(
            filtered_pids(&snapshot, "", &config, &cache),
            expected,
            "cpu {}",
            expression
        );
    }
}

#[test]
fn test_empty_term_matches_every_record() {
    let snapshot = sample_snapshot();
    let all: Vec<u32> = snapshot.iter().map(|r| r.pid).collect();
    let cache = RegexCache::new();

    for query in ["chrome,", ",chrome", "backup, ,zzz", " "] {
        assert_eq!(
            filtered_pids(&snapshot, query, &FilterConfig::default(), &cache),
            all,
            "query {:?}",
            query
        );
    }
}
