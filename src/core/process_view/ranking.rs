//! Process ordering.
//!
//! Pinned processes always come first. Within each group records are ordered
//! by the configured field and direction. Disk usage is a (read, written) pair
//! compared with a per-pair dominant-operation rule; that comparator is not a
//! total order, so the sort below is a hand-rolled stable merge sort that
//! tolerates inconsistent comparisons instead of `slice::sort_by`, which may
//! panic on them.

use std::cmp::Ordering;

use super::pins::PinSet;
use super::record::ProcessRecord;
use super::sort_config::{SortConfig, SortDirection, SortField};
use super::text_order::compare_text;

/// Runs at or below this length are insertion-sorted
const INSERTION_SORT_THRESHOLD: usize = 16;

/// Return a new, ordered list of the given records; the input is not touched
pub fn sort<'a, I>(processes: I, config: &SortConfig, pinned: &PinSet) -> Vec<&'a ProcessRecord>
where
    I: IntoIterator<Item = &'a ProcessRecord>,
{
    let mut ordered: Vec<&ProcessRecord> = processes.into_iter().collect();
    merge_sort_by(
        &mut ordered,
        &mut |a: &&ProcessRecord, b: &&ProcessRecord| compare_records(a, b, config, pinned),
    );
    ordered
}

/// Pin precedence, then the configured field in the configured direction
pub fn compare_records(
    a: &ProcessRecord,
    b: &ProcessRecord,
    config: &SortConfig,
    pinned: &PinSet,
) -> Ordering {
    match (pinned.is_pinned(a), pinned.is_pinned(b)) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    let natural = compare_field(config.field, a, b);
    match config.direction {
        SortDirection::Asc => natural,
        SortDirection::Desc => natural.reverse(),
    }
}

/// Ascending order of two records on a single field
pub fn compare_field(field: SortField, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
    match field {
        SortField::Pid => a.pid.cmp(&b.pid),
        SortField::Name => compare_text(&a.name, &b.name),
        SortField::Command => compare_text(&a.command, &b.command),
        SortField::Status => compare_text(a.status.as_str(), b.status.as_str()),
        SortField::CpuUsage => a
            .cpu_usage
            .partial_cmp(&b.cpu_usage)
            .unwrap_or(Ordering::Equal),
        SortField::MemoryUsage => a.memory_usage.cmp(&b.memory_usage),
        SortField::RunTime => a.run_time.cmp(&b.run_time),
        SortField::DiskUsage => compare_disk_usage(
            (a.disk_usage.read_bytes, a.disk_usage.written_bytes),
            (b.disk_usage.read_bytes, b.disk_usage.written_bytes),
        ),
    }
}

/// Ascending order of two (read, written) pairs.
///
/// The pair of records is classified on its own: write-dominant when the
/// summed writes exceed 1.5x the summed reads, read-dominant in the opposite
/// case, balanced otherwise.
///
/// - write-dominant: by writes, then reads
/// - read-dominant: by reads, then writes
/// - balanced: by read + written, then by the larger of the two counters
pub fn compare_disk_usage(a: (u64, u64), b: (u64, u64)) -> Ordering {
    let (a_read, a_written) = a;
    let (b_read, b_written) = b;
    let total_reads = a_read as u128 + b_read as u128;
    let total_writes = a_written as u128 + b_written as u128;

    // x > 1.5 * y, kept in integers
    if total_writes * 2 > total_reads * 3 {
        a_written.cmp(&b_written).then(a_read.cmp(&b_read))
    } else if total_reads * 2 > total_writes * 3 {
        a_read.cmp(&b_read).then(a_written.cmp(&b_written))
    } else {
        let a_total = a_read as u128 + a_written as u128;
        let b_total = b_read as u128 + b_written as u128;
        a_total
            .cmp(&b_total)
            .then(a_read.max(a_written).cmp(&b_read.max(b_written)))
    }
}

/// Stable merge sort. Terminates and yields a permutation of the input even
/// when `compare` is not transitive.
fn merge_sort_by<T, F>(items: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len <= INSERTION_SORT_THRESHOLD {
        insertion_sort_by(items, compare);
        return;
    }

    let mid = len / 2;
    merge_sort_by(&mut items[..mid], compare);
    merge_sort_by(&mut items[mid..], compare);

    if compare(&items[mid - 1], &items[mid]) != Ordering::Greater {
        return;
    }

    let mut merged = Vec::with_capacity(len);
    let (left, right) = items.split_at(mid);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // Ties take from the left run to keep the sort stable
        if compare(&right[j], &left[i]) == Ordering::Less {
            merged.push(right[j]);
            j += 1;
        } else {
            merged.push(left[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    items.copy_from_slice(&merged);
}

fn insertion_sort_by<T, F>(items: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
