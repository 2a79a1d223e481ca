//! Error types for distance and search operations.

use thiserror::Error;

/// Errors raised by the public API.
///
/// Computing a distance never fails. Errors come only from precondition
/// checks on caller-supplied data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// A nearest-candidate search was given no candidates.
    ///
    /// There is no closest element of an empty list, so this is reported
    /// rather than returning an arbitrary value.
    #[error("Candidate list is empty")]
    EmptyCandidates,

    /// Candidates were given, but none is within the configured maximum
    /// distance of the target.
    #[error("No candidate within distance {max_distance}")]
    NoCandidateWithin {
        /// The maximum distance the search was limited to.
        max_distance: usize,
    },

    /// A code point does not fit in a single UTF-16 code unit.
    ///
    /// The equality table is indexed by 16-bit code units. Wider values are
    /// rejected instead of being truncated into an unrelated unit.
    #[error("Value {value:#x} at index {index} is outside the UTF-16 code unit range")]
    CodeUnitOutOfRange {
        /// Position of the offending value in the input.
        index: usize,
        /// The rejected value.
        value: u32,
    },
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, DistanceError>;
