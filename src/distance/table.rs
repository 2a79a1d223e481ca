//! Reusable equality bit-vector table (`peq`).
//!
//! The table maps every UTF-16 code unit to a 32-bit mask marking where that
//! unit occurs in the block currently being compared. It has 65,536 entries
//! (256 KiB), so an engine allocates it once and reuses it for every call.
//!
//! # Invariant
//!
//! The table is all-zero between loads. [`EqualityTable::load`] hands out a
//! [`LoadedBlock`] guard that zeroes exactly the entries it set when it is
//! dropped. The guard runs on normal return, early return and unwinding, so
//! bits from one comparison can never leak into the next.

use std::fmt;

/// Number of entries in the table: one per 16-bit code unit.
pub(crate) const ALPHABET_SIZE: usize = 1 << 16;

/// Bits per mask word; also the longest block a single load can describe.
pub(crate) const WORD_BITS: usize = u32::BITS as usize;

/// Scratch table of per-code-unit match masks.
pub(crate) struct EqualityTable {
    masks: Box<[u32]>,
}

impl EqualityTable {
    /// Allocate a zeroed table.
    pub(crate) fn new() -> Self {
        Self {
            masks: vec![0u32; ALPHABET_SIZE].into_boxed_slice(),
        }
    }

    /// Mark the positions of `block` in the table.
    ///
    /// Bit `i` of the mask for unit `c` is set when `block[i] == c`.
    /// `block` must hold at most [`WORD_BITS`] units.
    #[inline]
    pub(crate) fn load<'t, 'b>(&'t mut self, block: &'b [u16]) -> LoadedBlock<'t, 'b> {
        debug_assert!(block.len() <= WORD_BITS);
        for (i, &unit) in block.iter().enumerate() {
            self.masks[usize::from(unit)] |= 1u32 << i;
        }
        LoadedBlock { table: self, block }
    }

    /// Returns true if no entry carries any bits.
    pub(crate) fn is_clear(&self) -> bool {
        self.masks.iter().all(|&mask| mask == 0)
    }
}

impl Default for EqualityTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EqualityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let populated = self.masks.iter().filter(|&&mask| mask != 0).count();
        f.debug_struct("EqualityTable")
            .field("entries", &self.masks.len())
            .field("populated", &populated)
            .finish()
    }
}

/// A block of code units currently loaded into an [`EqualityTable`].
///
/// Dropping the guard clears the entries the block populated.
pub(crate) struct LoadedBlock<'t, 'b> {
    table: &'t mut EqualityTable,
    block: &'b [u16],
}

impl LoadedBlock<'_, '_> {
    /// Match mask for `unit` against the loaded block.
    #[inline(always)]
    pub(crate) fn mask(&self, unit: u16) -> u32 {
        self.table.masks[usize::from(unit)]
    }
}

impl Drop for LoadedBlock<'_, '_> {
    #[inline]
    fn drop(&mut self) {
        for &unit in self.block {
            self.table.masks[usize::from(unit)] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_clear() {
        let table = EqualityTable::new();
        assert!(table.is_clear());
        assert_eq!(table.masks.len(), ALPHABET_SIZE);
    }

    #[test]
    fn test_load_sets_position_bits() {
        let mut table = EqualityTable::new();
        let block: Vec<u16> = "banana".encode_utf16().collect();
        let loaded = table.load(&block);

        assert_eq!(loaded.mask(u16::from(b'b')), 0b000001);
        assert_eq!(loaded.mask(u16::from(b'a')), 0b101010);
        assert_eq!(loaded.mask(u16::from(b'n')), 0b010100);
        assert_eq!(loaded.mask(u16::from(b'z')), 0);
    }

    #[test]
    fn test_drop_clears_table() {
        let mut table = EqualityTable::new();
        let block: Vec<u16> = "abracadabra".encode_utf16().collect();
        {
            let loaded = table.load(&block);
            assert_ne!(loaded.mask(u16::from(b'a')), 0);
        }
        assert!(table.is_clear());
    }

    #[test]
    fn test_full_word_block_uses_top_bit() {
        let mut table = EqualityTable::new();
        let mut block = vec![0u16; WORD_BITS];
        block[WORD_BITS - 1] = 0xFFFF;
        let loaded = table.load(&block);

        assert_eq!(loaded.mask(0xFFFF), 1u32 << 31);
        assert_eq!(loaded.mask(0), u32::MAX >> 1);
    }

    #[test]
    fn test_clears_on_unwind() {
        let mut table = EqualityTable::new();
        let block: Vec<u16> = vec![7, 8, 9];

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _loaded = table.load(&block);
            panic!("abort comparison");
        }));

        assert!(result.is_err());
        assert!(table.is_clear());
    }

    #[test]
    fn test_debug_reports_population() {
        let mut table = EqualityTable::new();
        let block = [1u16, 2, 2];
        let loaded = table.load(&block);
        drop(loaded);
        assert_eq!(
            format!("{:?}", table),
            "EqualityTable { entries: 65536, populated: 0 }"
        );
    }
}
