//! A thread-safe engine that serializes access to one scratch table.

use parking_lot::Mutex;

use super::engine::EditDistanceEngine;
use super::sequence::Sequence;

/// An [`EditDistanceEngine`] behind a mutex.
///
/// Every call locks the engine for its full duration, so concurrent callers
/// take turns on a single 256 KiB scratch table. This suits many threads
/// that each compute only occasionally. Throughput-bound workloads should
/// prefer one engine per thread, such as the thread-local free functions.
///
/// # Example
///
/// ```rust
/// use fastlev::distance::SharedEngine;
/// use std::sync::Arc;
/// use std::thread;
///
/// let engine = Arc::new(SharedEngine::new());
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let engine = Arc::clone(&engine);
///         thread::spawn(move || engine.distance("kitten", "sitting"))
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), 3);
/// }
/// ```
#[derive(Debug, Default)]
pub struct SharedEngine {
    inner: Mutex<EditDistanceEngine>,
}

impl SharedEngine {
    /// Create a shared engine with its own scratch table.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(EditDistanceEngine::new()),
        }
    }

    /// Edit distance between two sequences, in UTF-16 code units.
    pub fn distance<A, B>(&self, a: &A, b: &B) -> usize
    where
        A: Sequence + ?Sized,
        B: Sequence + ?Sized,
    {
        // Encode before locking so the critical section is just the kernel.
        a.with_code_units(|a| b.with_code_units(|b| self.inner.lock().distance_units(a, b)))
    }

    /// Edit distance between two raw code-unit slices.
    pub fn distance_units(&self, a: &[u16], b: &[u16]) -> usize {
        self.inner.lock().distance_units(a, b)
    }

    /// Normalized similarity in `[0.0, 1.0]`.
    pub fn similarity<A, B>(&self, a: &A, b: &B) -> f64
    where
        A: Sequence + ?Sized,
        B: Sequence + ?Sized,
    {
        a.with_code_units(|a| b.with_code_units(|b| self.inner.lock().similarity(a, b)))
    }

    /// Returns true if the scratch table holds no bits.
    pub fn scratch_is_clear(&self) -> bool {
        self.inner.lock().scratch_is_clear()
    }

    /// Unwrap into the underlying engine.
    pub fn into_inner(self) -> EditDistanceEngine {
        self.inner.into_inner()
    }
}

impl From<EditDistanceEngine> for SharedEngine {
    fn from(engine: EditDistanceEngine) -> Self {
        Self {
            inner: Mutex::new(engine),
        }
    }
}
