use procview::core::process_view::{
    compare_disk_usage, sort, PinSet, ProcessStatus, SortConfig, SortDirection, SortField,
};
use std::cmp::Ordering;

use super::common::{pids, record, sample_snapshot, with_disk};

#[test]
fn test_pinned_precede_unpinned_for_every_configuration() {
    let snapshot = sample_snapshot();
    let pins: PinSet = ["/usr/bin/backup", "/usr/bin/systemd"].into_iter().collect();

    for field in SortField::all() {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort(&snapshot, &SortConfig::new(field, direction), &pins);
            assert_eq!(sorted.len(), snapshot.len());

            let first_unpinned = sorted
                .iter()
                .position(|r| !pins.is_pinned(r))
                .unwrap_or(sorted.len());
            assert!(
                sorted[first_unpinned..].iter().all(|r| !pins.is_pinned(r)),
                "pinned record after unpinned for {} {:?}",
                field,
                direction
            );
            assert_eq!(first_unpinned, 2);
        }
    }
}

#[test]
fn test_desc_reverses_asc_for_distinct_keys() {
    let snapshot = sample_snapshot();
    let pins = PinSet::new();

    for field in [
        SortField::Pid,
        SortField::CpuUsage,
        SortField::MemoryUsage,
        SortField::RunTime,
    ] {
        let asc = pids(&sort(&snapshot, &SortConfig::asc(field), &pins));
        let mut desc = pids(&sort(&snapshot, &SortConfig::desc(field), &pins));
        desc.reverse();

        // cpu has a tie at 0.0 (pids 500 and 612); compare only distinct keys
        if field == SortField::CpuUsage {
            let strip = |v: &[u32]| -> Vec<u32> {
                v.iter().copied().filter(|p| *p != 500 && *p != 612).collect()
            };
            assert_eq!(strip(asc.as_slice()), strip(desc.as_slice()), "field {}", field);
        } else {
            assert_eq!(asc, desc, "field {}", field);
        }
    }
}

#[test]
fn test_ties_keep_snapshot_order() {
    let snapshot = sample_snapshot();
    let sorted = sort(&snapshot, &SortConfig::desc(SortField::CpuUsage), &PinSet::new());
    let tail = pids(&sorted[sorted.len() - 2..]);
    assert_eq!(tail, vec![500, 612]);
}

#[test]
fn test_name_sort_is_case_insensitive() {
    let snapshot = sample_snapshot();
    let sorted = sort(&snapshot, &SortConfig::asc(SortField::Name), &PinSet::new());
    let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "backup",
            "chrome",
            "chrome-renderer",
            "defunct-worker",
            "Firefox",
            "postgres",
            "postgres",
            "systemd"
        ]
    );
}

#[test]
fn test_status_sort_uses_status_names() {
    let snapshot = sample_snapshot();
    let sorted = sort(&snapshot, &SortConfig::asc(SortField::Status), &PinSet::new());
    let statuses: Vec<ProcessStatus> = sorted.iter().map(|r| r.status).collect();
    assert_eq!(statuses.first(), Some(&ProcessStatus::Running));
    assert_eq!(statuses.last(), Some(&ProcessStatus::Zombie));
}

#[test]
fn test_disk_balanced_scenario() {
    let a = with_disk(record(1, "a", ProcessStatus::Running, 0.0), 1000, 100);
    let b = with_disk(record(2, "b", ProcessStatus::Running, 0.0), 10, 900);
    let snapshot = vec![a, b];

    let asc = sort(&snapshot, &SortConfig::asc(SortField::DiskUsage), &PinSet::new());
    assert_eq!(pids(&asc), vec![2, 1]);

    let desc = sort(&snapshot, &SortConfig::desc(SortField::DiskUsage), &PinSet::new());
    assert_eq!(pids(&desc), vec![1, 2]);
}

#[test]
fn test_disk_write_dominant_scenario() {
    let a = with_disk(record(1, "a", ProcessStatus::Running, 0.0), 10, 10);
    let b = with_disk(record(2, "b", ProcessStatus::Running, 0.0), 5, 500);
    let snapshot = vec![b, a];

    let asc = sort(&snapshot, &SortConfig::asc(SortField::DiskUsage), &PinSet::new());
    assert_eq!(pids(&asc), vec![1, 2]);
}

#[test]
fn test_disk_write_dominant_tie_breaks_on_reads() {
    assert_eq!(compare_disk_usage((1, 400), (2, 400)), Ordering::Less);
}

#[test]
fn test_disk_order_is_not_guaranteed_transitive() {
    // Each pair is classified on its own, so the comparator can cycle:
    // a < b (balanced), b < c (write-dominant), c < a (read-dominant).
    let (a, b, c) = ((100, 0), (0, 120), (99, 130));
    assert_eq!(compare_disk_usage(a, b), Ordering::Less);
    assert_eq!(compare_disk_usage(b, c), Ordering::Less);
    assert_eq!(compare_disk_usage(c, a), Ordering::Less);

    let snapshot = vec![
        with_disk(record(1, "a", ProcessStatus::Running, 0.0), a.0, a.1),
        with_disk(record(2, "b", ProcessStatus::Running, 0.0), b.0, b.1),
        with_disk(record(3, "c", ProcessStatus::Running, 0.0), c.0, c.1),
    ];
    let pins: PinSet = ["/usr/bin/c"].into_iter().collect();

    // Whatever order the cycle settles in, pins still win and nothing is lost
    let sorted = sort(&snapshot, &SortConfig::asc(SortField::DiskUsage), &pins);
    assert_eq!(sorted[0].pid, 3);
    let mut seen = pids(&sorted);
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3]);
}
