//! The edit-distance engine: owns the scratch table and dispatches between
//! the single-word and multi-word kernels.

use super::myers::{myers_32, myers_x};
use super::sequence::Sequence;
use super::table::{EqualityTable, WORD_BITS};

#[cfg(feature = "perf-instrumentation")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "perf-instrumentation")]
static SINGLE_WORD_RUNS: AtomicUsize = AtomicUsize::new(0);

#[cfg(feature = "perf-instrumentation")]
static MULTI_WORD_RUNS: AtomicUsize = AtomicUsize::new(0);

/// Returns `(single_word_runs, multi_word_runs)` since the last reset.
///
/// Counts are process-wide and include every engine on every thread.
#[cfg(feature = "perf-instrumentation")]
pub fn get_perf_stats() -> (usize, usize) {
    (
        SINGLE_WORD_RUNS.load(Ordering::Relaxed),
        MULTI_WORD_RUNS.load(Ordering::Relaxed),
    )
}

/// Reset the kernel dispatch counters.
#[cfg(feature = "perf-instrumentation")]
pub fn reset_perf_stats() {
    SINGLE_WORD_RUNS.store(0, Ordering::Relaxed);
    MULTI_WORD_RUNS.store(0, Ordering::Relaxed);
}

/// Levenshtein distance calculator using Myers' bit-parallel algorithm.
///
/// The engine owns a 64K-entry equality table that every call reuses. Hence
/// `&mut self`: one engine serves one caller at a time. For concurrent use,
/// create one engine per thread (the free functions in
/// [`crate::distance`] do exactly that) or wrap one in
/// [`SharedEngine`](super::SharedEngine).
///
/// # Example
///
/// ```rust
/// use fastlev::distance::EditDistanceEngine;
///
/// let mut engine = EditDistanceEngine::new();
/// assert_eq!(engine.distance("kitten", "sitting"), 3);
/// assert_eq!(engine.distance("", "abc"), 3);
/// assert!(engine.scratch_is_clear());
/// ```
#[derive(Debug, Default)]
pub struct EditDistanceEngine {
    table: EqualityTable,
}

impl EditDistanceEngine {
    /// Create an engine with a zeroed scratch table.
    pub fn new() -> Self {
        Self {
            table: EqualityTable::new(),
        }
    }

    /// Edit distance between two sequences, in UTF-16 code units.
    #[inline]
    pub fn distance<A, B>(&mut self, a: &A, b: &B) -> usize
    where
        A: Sequence + ?Sized,
        B: Sequence + ?Sized,
    {
        a.with_code_units(|a| b.with_code_units(|b| self.distance_units(a, b)))
    }

    /// Edit distance between two raw code-unit slices.
    ///
    /// The longer slice is loaded into the equality table and the shorter
    /// one swept against it. If the longer slice fits in one 32-bit word the
    /// single-word kernel runs, otherwise the multi-word kernel.
    pub fn distance_units(&mut self, a: &[u16], b: &[u16]) -> usize {
        let (long, short) = if a.len() < b.len() { (b, a) } else { (a, b) };

        if short.is_empty() {
            return long.len();
        }

        if long.len() <= WORD_BITS {
            #[cfg(feature = "perf-instrumentation")]
            SINGLE_WORD_RUNS.fetch_add(1, Ordering::Relaxed);

            myers_32(&mut self.table, long, short)
        } else {
            #[cfg(feature = "perf-instrumentation")]
            MULTI_WORD_RUNS.fetch_add(1, Ordering::Relaxed);

            myers_x(&mut self.table, long, short)
        }
    }

    /// Normalized similarity in `[0.0, 1.0]`: `1 - distance / max_len`.
    ///
    /// Two empty sequences are identical and score `1.0`.
    pub fn similarity<A, B>(&mut self, a: &A, b: &B) -> f64
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
                    1.0 - (self.distance_units(a, b) as f64 / max_len as f64)
                }
            })
        })
    }

    /// Returns true if the scratch table holds no bits.
    ///
    /// This holds after every completed call. It is exposed so callers can
    /// assert it in tests.
    pub fn scratch_is_clear(&self) -> bool {
        self.table.is_clear()
    }
}
