//! Nearest-candidate search by edit distance.
//!
//! A linear scan that computes the distance from a target to each candidate
//! and keeps the minimum. Ties go to the earliest candidate, so the result
//! depends only on the order of the candidate list.
//!
//! ```rust
//! use fastlev::search::closest;
//!
//! let best = closest("fast", &["slow", "faster", "fastest"]).unwrap();
//! assert_eq!(*best, "faster");
//! ```

use crate::distance::{distance_units, EditDistanceEngine, Sequence};
use crate::error::{DistanceError, Result};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// A candidate together with its position and distance from the target.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct Match<'c, S> {
    /// Index of the candidate in the input list.
    pub index: usize,
    /// The candidate itself.
    pub item: &'c S,
    /// Edit distance from the target.
    pub distance: usize,
}

impl<S> Clone for Match<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Match<'_, S> {}

/// Finds the candidate closest to a target string.
///
/// Owns an [`EditDistanceEngine`], so repeated searches reuse one scratch
/// table. An optional maximum distance drops candidates that are too far
/// away.
///
/// # Example
///
/// ```rust
/// use fastlev::search::NearestNeighborFinder;
///
/// let commands = ["build", "bench", "check", "clean", "test"];
/// let mut finder = NearestNeighborFinder::new().with_max_distance(2);
///
/// let hit = finder.closest_match("tset", &commands).unwrap().unwrap();
/// assert_eq!(*hit.item, "test");
/// assert_eq!(hit.distance, 2);
///
/// assert!(finder.closest_match("deploy", &commands).unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct NearestNeighborFinder {
    engine: EditDistanceEngine,
    max_distance: Option<usize>,
}

impl NearestNeighborFinder {
    /// Create a finder that accepts candidates at any distance.
    pub fn new() -> Self {
        Self {
            engine: EditDistanceEngine::new(),
            max_distance: None,
        }
    }

    /// Only accept candidates within `max_distance` edits of the target.
    #[must_use]
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// Build a finder around an existing engine.
    pub fn with_engine(engine: EditDistanceEngine) -> Self {
        Self {
            engine,
            max_distance: None,
        }
    }

    /// The configured maximum distance, if any.
    pub fn max_distance(&self) -> Option<usize> {
        self.max_distance
    }

    /// The closest candidate to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::EmptyCandidates`] if `candidates` is empty,
    /// and [`DistanceError::NoCandidateWithin`] if a maximum distance is set
    /// and no candidate falls within it.
    pub fn closest<'c, T, S>(&mut self, target: &T, candidates: &'c [S]) -> Result<&'c S>
    where
        T: Sequence + ?Sized,
        S: Sequence,
    {
        let found = self.closest_match(target, candidates)?;
        match (found, self.max_distance) {
            (Some(found), _) => Ok(found.item),
            (None, Some(max_distance)) => Err(DistanceError::NoCandidateWithin { max_distance }),
            (None, None) => Err(DistanceError::EmptyCandidates),
        }
    }

    /// The closest candidate with its index and distance, or `None` if no
    /// candidate is within the maximum distance.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::EmptyCandidates`] if `candidates` is empty.
    pub fn closest_match<'c, T, S>(
        &mut self,
        target: &T,
        candidates: &'c [S],
    ) -> Result<Option<Match<'c, S>>>
    where
        T: Sequence + ?Sized,
        S: Sequence,
    {
        if candidates.is_empty() {
            return Err(DistanceError::EmptyCandidates);
        }

        let limit = self.max_distance;
        let engine = &mut self.engine;
        let best = target.with_code_units(|target| {
            scan(candidates, |candidate| {
                candidate.with_code_units(|units| engine.distance_units(target, units))
            })
        });

        Ok(best.filter(|found| limit.map_or(true, |max| found.distance <= max)))
    }

    /// Every admissible candidate, nearest first.
    ///
    /// Candidates are ordered by distance, then by their position in the
    /// input. An empty input yields an empty list.
    pub fn rank<'c, T, S>(&mut self, target: &T, candidates: &'c [S]) -> Vec<Match<'c, S>>
    where
        T: Sequence + ?Sized,
        S: Sequence,
    {
        let limit = self.max_distance;
        let engine = &mut self.engine;
        let mut matches: Vec<Match<'c, S>> = target.with_code_units(|target| {
            candidates
                .iter()
                .enumerate()
                .map(|(index, item)| Match {
                    index,
                    item,
                    distance: item.with_code_units(|units| engine.distance_units(target, units)),
                })
                .filter(|found| limit.map_or(true, |max| found.distance <= max))
                .collect()
        });

        matches.sort_by_key(|found| (found.distance, found.index));
        matches
    }
}

/// Linear scan for the minimum distance. Only a strict improvement replaces
/// the current best; a zero distance cannot be improved on and ends the scan.
fn scan<'c, S>(candidates: &'c [S], mut measure: impl FnMut(&S) -> usize) -> Option<Match<'c, S>> {
    let mut best: Option<Match<'c, S>> = None;

    for (index, item) in candidates.iter().enumerate() {
        let distance = measure(item);
        if best.as_ref().map_or(true, |found| distance < found.distance) {
            best = Some(Match {
                index,
                item,
                distance,
            });
            if distance == 0 {
                break;
            }
        }
    }

    best
}

/// Find the candidate closest to `target` using this thread's engine.
///
/// Ties keep the earliest candidate.
///
/// # Errors
///
/// Returns [`DistanceError::EmptyCandidates`] if `candidates` is empty.
///
/// # Example
///
/// ```rust
/// use fastlev::search::closest;
/// use fastlev::DistanceError;
///
/// assert_eq!(*closest("fast", &["slow", "faster", "fastest"]).unwrap(), "faster");
///
/// let none: [&str; 0] = [];
/// assert_eq!(closest("fast", &none), Err(DistanceError::EmptyCandidates));
/// ```
pub fn closest<'c, T, S>(target: &T, candidates: &'c [S]) -> Result<&'c S>
where
    T: Sequence + ?Sized,
    S: Sequence,
{
    closest_match(target, candidates).map(|found| found.item)
}

/// Like [`closest`], but also reports the index and distance of the winner.
///
/// # Errors
///
/// Returns [`DistanceError::EmptyCandidates`] if `candidates` is empty.
pub fn closest_match<'c, T, S>(target: &T, candidates: &'c [S]) -> Result<Match<'c, S>>
where
    T: Sequence + ?Sized,
    S: Sequence,
{
    // The thread engine is borrowed per distance, never across a call into
    // a candidate's `with_code_units`.
    target
        .with_code_units(|target| {
            scan(candidates, |candidate| {
                candidate.with_code_units(|units| distance_units(target, units))
            })
        })
        .ok_or(DistanceError::EmptyCandidates)
}

/// Parallel [`closest`]. Each worker thread uses its own thread-local engine.
///
/// The winner is the minimum of `(distance, index)`, so ties resolve to the
/// earliest candidate exactly as in the sequential scan.
///
/// # Errors
///
/// Returns [`DistanceError::EmptyCandidates`] if `candidates` is empty.
#[cfg(feature = "rayon")]
pub fn par_closest<'c, T, S>(target: &T, candidates: &'c [S]) -> Result<&'c S>
where
    T: Sequence + Sync + ?Sized,
    S: Sequence + Sync,
{
    candidates
        .par_iter()
        .enumerate()
        .map(|(index, item)| (crate::distance::distance(target, item), index))
        .min()
        .map(|(_, index)| &candidates[index])
        .ok_or(DistanceError::EmptyCandidates)
}
