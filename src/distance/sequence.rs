//! Input sequences as UTF-16 code units.
//!
//! Distances are measured over 16-bit code units, the same unit JavaScript
//! string indexing uses. A character outside the Basic Multilingual Plane is
//! a surrogate pair and therefore counts as two units:
//!
//! ```rust
//! use fastlev::distance::distance;
//!
//! assert_eq!(distance("a", "😀"), 2);
//! ```

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::error::{DistanceError, Result};

/// Inline capacity for encoded inputs. Inputs up to this length fit the
/// single-word kernel and never touch the heap.
const INLINE_UNITS: usize = 32;

/// Anything that can be viewed as a sequence of UTF-16 code units.
///
/// Borrowed forms (`[u16]`, `Vec<u16>`, [`CodeUnits`]) hand their slice over
/// directly; `str` is encoded into a stack buffer for the duration of the
/// callback.
pub trait Sequence {
    /// Calls `f` with this sequence's code units.
    fn with_code_units<R>(&self, f: impl FnOnce(&[u16]) -> R) -> R;

    /// Number of code units in the sequence.
    fn unit_len(&self) -> usize {
        self.with_code_units(|units| units.len())
    }
}

impl Sequence for str {
    #[inline]
    fn with_code_units<R>(&self, f: impl FnOnce(&[u16]) -> R) -> R {
        let units: SmallVec<[u16; INLINE_UNITS]> = self.encode_utf16().collect();
        f(&units)
    }

    #[inline]
    fn unit_len(&self) -> usize {
        self.encode_utf16().count()
    }
}

impl Sequence for String {
    #[inline]
    fn with_code_units<R>(&self, f: impl FnOnce(&[u16]) -> R) -> R {
        self.as_str().with_code_units(f)
    }

    #[inline]
    fn unit_len(&self) -> usize {
        self.as_str().unit_len()
    }
}

impl Sequence for Cow<'_, str> {
    #[inline]
    fn with_code_units<R>(&self, f: impl FnOnce(&[u16]) -> R) -> R {
        self.as_ref().with_code_units(f)
    }
}

impl Sequence for [u16] {
    #[inline]
    fn with_code_units<R>(&self, f: impl FnOnce(&[u16]) -> R) -> R {
        f(self)
    }

    #[inline]
    fn unit_len(&self) -> usize {
        self.len()
    }
}

impl Sequence for Vec<u16> {
    #[inline]
    fn with_code_units<R>(&self, f: impl FnOnce(&[u16]) -> R) -> R {
        f(self)
    }

    #[inline]
    fn unit_len(&self) -> usize {
        self.len()
    }
}

impl<T: Sequence + ?Sized> Sequence for &T {
    #[inline]
    fn with_code_units<R>(&self, f: impl FnOnce(&[u16]) -> R) -> R {
        (**self).with_code_units(f)
    }

    #[inline]
    fn unit_len(&self) -> usize {
        (**self).unit_len()
    }
}

/// An owned, pre-encoded UTF-16 sequence.
///
/// Encoding a `str` costs a pass over its bytes. When one string is compared
/// against many others, encode it once into `CodeUnits` and reuse it.
///
/// # Example
///
/// ```rust
/// use fastlev::distance::{distance, CodeUnits};
///
/// let query = CodeUnits::from("kitten");
/// assert_eq!(query.len(), 6);
/// assert_eq!(distance(&query, "sitting"), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodeUnits {
    units: SmallVec<[u16; INLINE_UNITS]>,
}

impl CodeUnits {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence from raw numeric values, each of which must be a
    /// single UTF-16 code unit.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::CodeUnitOutOfRange`] for the first value
    /// above `0xFFFF`. Values are never truncated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fastlev::distance::CodeUnits;
    /// use fastlev::DistanceError;
    ///
    /// assert!(CodeUnits::from_code_points(&[0x61, 0xFFFF]).is_ok());
    /// assert_eq!(
    ///     CodeUnits::from_code_points(&[0x61, 0x1F600]),
    ///     Err(DistanceError::CodeUnitOutOfRange { index: 1, value: 0x1F600 })
    /// );
    /// ```
    pub fn from_code_points(values: &[u32]) -> Result<Self> {
        let units = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                u16::try_from(value).map_err(|_| DistanceError::CodeUnitOutOfRange { index, value })
            })
            .collect::<Result<SmallVec<[u16; INLINE_UNITS]>>>()?;
        Ok(Self { units })
    }

    /// Number of code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns true if the sequence holds no code units.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The code units as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.units
    }

    /// Decode back into a `String`, replacing unpaired surrogates with
    /// U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

impl From<&str> for CodeUnits {
    fn from(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }
}

impl From<&[u16]> for CodeUnits {
    fn from(units: &[u16]) -> Self {
        Self {
            units: SmallVec::from_slice(units),
        }
    }
}

impl FromIterator<u16> for CodeUnits {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[u16]> for CodeUnits {
    fn as_ref(&self) -> &[u16] {
        &self.units
    }
}

impl Sequence for CodeUnits {
    #[inline]
    fn with_code_units<R>(&self, f: impl FnOnce(&[u16]) -> R) -> R {
        f(&self.units)
    }

    #[inline]
    fn unit_len(&self) -> usize {
        self.units.len()
    }
}
