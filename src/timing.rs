use std::time::Instant;

/// Wall-clock duration of `op` in milliseconds.
pub fn measure_ms<F: FnOnce()>(op: F) -> f64 {
    let start = Instant::now();
    op();
    start.elapsed().as_secs_f64() * 1_000.0
}
