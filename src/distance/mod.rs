//! Levenshtein distance computation.
//!
//! The distance is computed with Myers' bit-parallel algorithm over UTF-16
//! code units:
//! - **Single-word kernel**: the longer input has at most 32 units, so a whole
//!   DP column fits in one `u32`
//! - **Multi-word kernel**: longer inputs are processed in 32-unit blocks
//!   linked by per-column carry bits
//! - **Reference DP**: the classic two-row O(n·m) table, kept as a baseline
//!   and test oracle
//!
//! The free functions in this module use one [`EditDistanceEngine`] per
//! thread, so they can be called from any thread without coordination.

use std::cell::RefCell;

mod engine;
mod myers;
mod sequence;
mod shared;
mod table;

pub use engine::EditDistanceEngine;
pub use sequence::{CodeUnits, Sequence};
pub use shared::SharedEngine;

#[cfg(feature = "perf-instrumentation")]
pub use engine::{get_perf_stats, reset_perf_stats};

thread_local! {
    static ENGINE: RefCell<EditDistanceEngine> = RefCell::new(EditDistanceEngine::new());
}

/// Run `f` with this thread's engine.
///
/// `f` must not call back into caller code: a `Sequence` impl may itself use
/// the free functions, and the engine is exclusively borrowed while `f` runs.
#[inline]
pub(crate) fn with_thread_engine<R>(f: impl FnOnce(&mut EditDistanceEngine) -> R) -> R {
    ENGINE.with(|engine| f(&mut engine.borrow_mut()))
}

/// Compute the Levenshtein distance between two sequences.
///
/// Counts the minimum number of single code-unit insertions, deletions and
/// substitutions that turn `a` into `b`. String inputs are measured in UTF-16
/// code units.
///
/// # Example
///
/// ```rust
/// use fastlev::distance::distance;
///
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("fast", "faster"), 2);
/// assert_eq!(distance("", ""), 0);
/// ```
#[inline]
pub fn distance<A, B>(a: &A, b: &B) -> usize
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
{
    a.with_code_units(|a| b.with_code_units(|b| distance_units(a, b)))
}

/// Compute the Levenshtein distance between two code-unit slices.
///
/// ```rust
/// use fastlev::distance::distance_units;
///
/// assert_eq!(distance_units(&[0x61, 0x62], &[0x62]), 1);
/// ```
#[inline]
pub fn distance_units(a: &[u16], b: &[u16]) -> usize {
    with_thread_engine(|engine| engine.distance_units(a, b))
}

/// Normalized similarity (0.0 to 1.0), `1 - distance / max_len`.
///
/// ```rust
/// use fastlev::distance::similarity;
///
/// assert_eq!(similarity("abcd", "abcd"), 1.0);
/// assert_eq!(similarity("abcd", "abce"), 0.75);
/// ```
#[inline]
pub fn similarity<A, B>(a: &A, b: &B) -> f64
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
{
    a.with_code_units(|a| {
        b.with_code_units(|b| {
            let max_len = a.len().max(b.len());
            if max_len == 0 {
                1.0
            } else {
                1.0 - (distance_units(a, b) as f64 / max_len as f64)
            }
        })
    })
}

/// Classic dynamic-programming Levenshtein distance.
///
/// Space-optimized to two rows. This is the O(n·m) baseline the bit-parallel
/// kernels are validated and benchmarked against.
/// Public for benchmarking and testing purposes.
pub fn dp_distance(source: &[u16], target: &[u16]) -> usize {
    let m = source.len();
    let n = target.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source[i - 1] != target[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}
