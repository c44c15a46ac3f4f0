//! Library-provided none-of under the two execution policies the hand-rolled
//! evaluator is benchmarked against.

use rayon::prelude::*;

/// Plain sequential scan; stops at the first match.
pub fn none_of_sequential<F>(values: &[i32], pred: F) -> bool
where
    F: Fn(i32) -> bool,
{
    !values.iter().copied().any(pred)
}

/// Rayon's work-stealing pool over the same query.
pub fn none_of_parallel<F>(values: &[i32], pred: F) -> bool
where
    F: Fn(i32) -> bool + Sync,
{
    !values.par_iter().copied().any(|value| pred(value))
}
