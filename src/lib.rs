//! Benchmark harness for a "none match a predicate" query: a hand-rolled
//! thread-partitioned evaluator, library baselines, and a sweep over worker
//! counts to find the fastest degree of parallelism on the current host.

pub mod baseline;
pub mod data;
pub mod parallel;
pub mod report;
pub mod sweep;
pub mod timing;
