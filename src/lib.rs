//! # fastlev
//!
//! Fast Levenshtein distance using Myers' bit-parallel algorithm.
//!
//! Distances are measured in UTF-16 code units. Inputs whose longer side fits
//! in one 32-bit word run a single-word kernel. Longer inputs are processed
//! in 32-unit blocks linked by per-column carry bits. A nearest-candidate
//! search sits on top.
//!
//! > Myers, Gene. "A fast bit-vector algorithm for approximate string
//! > matching based on dynamic programming." Journal of the ACM 46.3
//! > (1999): 395-415.
//!
//! ## Example
//!
//! ```rust
//! use fastlev::prelude::*;
//!
//! assert_eq!(distance("kitten", "sitting"), 3);
//! assert_eq!(*closest("fast", &["slow", "faster", "fastest"]).unwrap(), "faster");
//!
//! // An explicit engine owns its scratch table
//! let mut engine = EditDistanceEngine::new();
//! assert_eq!(engine.distance("fast", "faster"), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod error;
pub mod search;

pub use error::{DistanceError, Result};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::{
        distance, distance_units, similarity, CodeUnits, EditDistanceEngine, Sequence,
        SharedEngine,
    };
    pub use crate::error::{DistanceError, Result};
    pub use crate::search::{closest, closest_match, Match, NearestNeighborFinder};

    #[cfg(feature = "rayon")]
    pub use crate::search::par_closest;
}
