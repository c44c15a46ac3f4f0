use std::ops::Range;
use std::thread;

/// Sweep ceiling used when the number of CPUs cannot be determined.
pub const FALLBACK_MAX_WORKERS: usize = 16;

/// Highest worker count worth sweeping on this host: twice the CPU count,
/// or `fallback` if detection comes back empty.
pub fn max_workers_for_host(fallback: usize) -> usize {
    match num_cpus::get() {
        0 => fallback,
        cpus => cpus * 2,
    }
}

/// Split `[0, len)` into up to `num_workers` contiguous ranges of
/// `ceil(len / num_workers)` elements each; only the last range may be
/// shorter. When `num_workers > len` fewer ranges come back, one per element.
pub fn chunk_ranges(len: usize, num_workers: usize) -> Vec<Range<usize>> {
    assert!(num_workers >= 1, "need at least one worker");

    if len == 0 {
        return Vec::new();
    }

    let chunk_size = len.div_ceil(num_workers);

    (0..len)
        .step_by(chunk_size)
        .map(|start| start..(start + chunk_size).min(len))
        .collect()
}

/// Returns true iff no element of `values` satisfies `pred`, evaluated by
/// `num_workers` forked threads over disjoint chunks.
///
/// Each worker scans its whole chunk and writes a single boolean into a slot
/// owned by that chunk alone, so the result storage needs no synchronization;
/// the scope join is the only barrier, and reduction happens after it. Workers
/// never exit early — a match found in one chunk does not stop the others, so
/// every call does the same per-element work regardless of the answer. That
/// keeps sweep timings comparable across worker counts at the cost of the
/// short-circuit a sequential scan would get.
pub fn parallel_none_of<F>(values: &[i32], num_workers: usize, pred: F) -> bool
where
    F: Fn(i32) -> bool + Sync,
{
    let ranges = chunk_ranges(values.len(), num_workers);
    if ranges.is_empty() {
        return true;
    }

    let mut partials = vec![true; ranges.len()];

    thread::scope(|scope| {
        for (range, slot) in ranges.into_iter().zip(partials.iter_mut()) {
            let chunk = &values[range];
            let pred = &pred;
            scope.spawn(move || {
                let mut matched = false;
                for &value in chunk {
                    matched |= pred(value);
                }
                *slot = !matched;
            });
        }
    });

    partials.into_iter().all(|none_matched| none_matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_even(value: i32) -> bool {
        value % 2 == 0
    }

    #[test]
    fn test_ranges_cover_every_index_exactly_once() {
        for len in [0usize, 1, 2, 3, 10, 17, 100, 1000, 1001] {
            for workers in 1..=12 {
                let ranges = chunk_ranges(len, workers);
                let max_len = len.div_ceil(workers.max(1));

                let mut next = 0;
                for range in &ranges {
                    assert_eq!(range.start, next, "gap or overlap at len={len} workers={workers}");
                    assert!(range.end > range.start, "empty range produced");
                    assert!(range.end - range.start <= max_len.max(1));
                    next = range.end;
                }
                assert_eq!(next, len, "ranges do not cover [0, {len})");
            }
        }
    }

    #[test]
    fn test_more_workers_than_elements() {
        let ranges = chunk_ranges(3, 10);
        assert_eq!(ranges.len(), 3);
        assert!(ranges.iter().all(|r| r.end - r.start == 1));
    }

    #[test]
    fn test_empty_input_spawns_nothing() {
        assert!(chunk_ranges(0, 4).is_empty());
        assert!(parallel_none_of(&[], 4, is_even));
    }

    #[test]
    fn test_result_independent_of_worker_count() {
        let all_odd = [3, 5, 7, 9];
        for workers in 1..=4 {
            assert!(parallel_none_of(&all_odd, workers, is_even));
        }

        let one_even = [3, 5, 7, 8, 9];
        for workers in 1..=5 {
            assert!(!parallel_none_of(&one_even, workers, is_even));
        }
    }

    #[test]
    fn test_repeated_calls_agree() {
        let values: Vec<i32> = (0..997).map(|i| i * 2 + 1).collect();
        let first = parallel_none_of(&values, 3, is_even);
        let second = parallel_none_of(&values, 3, is_even);
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn test_worker_count_far_beyond_input() {
        // 10 workers, 3 elements: only 3 threads ever run.
        assert!(!parallel_none_of(&[1, 2, 3], 10, is_even));
    }
}
