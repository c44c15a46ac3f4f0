use crate::parallel::parallel_none_of;
use crate::timing::measure_ms;

/// One timed evaluation at a given worker count.
#[derive(Debug, Clone, Copy)]
pub struct SweepRecord {
    pub workers: usize,
    pub elapsed_ms: f64,
}

/// Result of sweeping worker counts: every measurement plus the winner.
#[derive(Debug)]
pub struct SweepOutcome {
    pub best_workers: usize,
    pub best_ms: f64,
    pub records: Vec<SweepRecord>,
}

impl SweepOutcome {
    /// Picks the best record with strict less-than, so the smallest worker
    /// count wins when several tie on time.
    pub fn from_records(records: Vec<SweepRecord>) -> Self {
        let mut best_workers = 0;
        let mut best_ms = f64::INFINITY;

        for record in &records {
            if record.elapsed_ms < best_ms {
                best_ms = record.elapsed_ms;
                best_workers = record.workers;
            }
        }

        Self {
            best_workers,
            best_ms,
            records,
        }
    }
}

/// Times one `parallel_none_of` call per worker count from 1 to `max_workers`
/// inclusive and reports each measurement through `on_record` as it lands.
///
/// The query result is discarded: the sweep measures cost, not correctness.
/// Timings are noisy, so two sweeps over identical input may crown different
/// winners; that is a property of the benchmark, not a defect.
pub fn sweep_worker_counts<F, O>(
    values: &[i32],
    pred: F,
    max_workers: usize,
    mut on_record: O,
) -> SweepOutcome
where
    F: Fn(i32) -> bool + Sync,
    O: FnMut(&SweepRecord),
{
    assert!(max_workers >= 1, "need at least one worker count to sweep");

    let mut records = Vec::with_capacity(max_workers);

    for workers in 1..=max_workers {
        let elapsed_ms = measure_ms(|| {
            parallel_none_of(values, workers, &pred);
        });

        let record = SweepRecord {
            workers,
            elapsed_ms,
        };
        on_record(&record);
        records.push(record);
    }

    SweepOutcome::from_records(records)
}
