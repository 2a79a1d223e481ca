//! Myers' bit-parallel edit-distance kernels.
//!
//! Both kernels encode one column of the Levenshtein DP matrix as bit
//! vectors: `pv`/`mv` flag cells whose value is one more (`p`) or one less
//! (`m`) than the cell above, and `ph`/`mh` do the same horizontally.
//! A full column advances in a handful of word operations.
//!
//! > Myers, Gene. "A fast bit-vector algorithm for approximate string
//! > matching based on dynamic programming." Journal of the ACM 46.3
//! > (1999): 395-415.
//!
//! All arithmetic is on `u32`. The carry trick `((eq & pv) + pv) ^ pv` needs
//! wrapping addition, and every shift amount is reduced modulo 32 explicitly.
//!
//! Callers guarantee the orientation: `long.len() >= short.len() >= 1`.

use smallvec::{smallvec, SmallVec};

use super::table::{EqualityTable, WORD_BITS};

/// Single-word kernel for `long.len() <= 32`.
///
/// `long` is loaded into the equality table; `short` is swept one unit per
/// column. The score starts at `long.len()` and follows the bottom row of
/// the DP matrix.
pub(crate) fn myers_32(table: &mut EqualityTable, long: &[u16], short: &[u16]) -> usize {
    debug_assert!(!short.is_empty() && short.len() <= long.len() && long.len() <= WORD_BITS);

    let last = 1u32 << (long.len() - 1);
    let peq = table.load(long);

    let mut pv = !0u32;
    let mut mv = 0u32;
    let mut score = long.len();

    for &unit in short {
        let mut eq = peq.mask(unit);
        let xv = eq | mv;
        eq |= ((eq & pv).wrapping_add(pv)) ^ pv;
        mv |= !(eq | pv);
        pv &= eq;

        // mv/pv now hold the horizontal deltas and are disjoint.
        if mv & last != 0 {
            score += 1;
        }
        if pv & last != 0 {
            score -= 1;
        }

        mv = (mv << 1) | 1;
        pv = (pv << 1) | !(xv | mv);
        mv &= xv;
    }

    score
}

/// Horizontal carry bits between blocks, one bit per column of `short`.
///
/// Bit `i` of `phc`/`mhc` holds the horizontal delta leaving the bottom row
/// of the previous block at column `i`, which becomes the delta entering the
/// top row of the next block. The DP's first row increases by one per
/// column, so `phc` starts all ones and `mhc` all zeros.
struct CarryBits {
    phc: SmallVec<[u32; 8]>,
    mhc: SmallVec<[u32; 8]>,
}

impl CarryBits {
    fn new(columns: usize) -> Self {
        let words = columns.div_ceil(WORD_BITS);
        Self {
            phc: smallvec![!0u32; words],
            mhc: smallvec![0u32; words],
        }
    }

    /// Incoming `(pb, mb)` carry bits for column `i`.
    #[inline(always)]
    fn get(&self, i: usize) -> (u32, u32) {
        let (word, bit) = (i / WORD_BITS, i % WORD_BITS);
        ((self.phc[word] >> bit) & 1, (self.mhc[word] >> bit) & 1)
    }

    /// Record the outgoing carries (bit 31 of `ph`/`mh`) for column `i`.
    #[inline(always)]
    fn store(&mut self, i: usize, ph: u32, mh: u32, pb: u32, mb: u32) {
        let (word, bit) = (i / WORD_BITS, i % WORD_BITS);
        if (ph >> 31) ^ pb != 0 {
            self.phc[word] ^= 1 << bit;
        }
        if (mh >> 31) ^ mb != 0 {
            self.mhc[word] ^= 1 << bit;
        }
    }
}

/// Vertical state of one 32-row block.
struct BlockColumn {
    pv: u32,
    mv: u32,
}

impl BlockColumn {
    fn new() -> Self {
        Self { pv: !0u32, mv: 0 }
    }

    /// Advance one column and return the unshifted `(ph, mh)` deltas of the
    /// block's rows.
    #[inline(always)]
    fn advance(&mut self, eq: u32, carries: &mut CarryBits, i: usize) -> (u32, u32) {
        let (pb, mb) = carries.get(i);
        let xv = eq | self.mv;
        let xh = ((((eq | mb) & self.pv).wrapping_add(self.pv)) ^ self.pv) | eq | mb;
        let ph = self.mv | !(xh | self.pv);
        let mh = self.pv & xh;

        carries.store(i, ph, mh, pb, mb);

        let ph_in = (ph << 1) | pb;
        let mh_in = (mh << 1) | mb;
        self.pv = mh_in | !(xv | ph_in);
        self.mv = ph_in & xv;

        (ph, mh)
    }
}

/// Multi-word kernel for `long.len() > 32`.
///
/// `long` is tiled into the equality table 32 units at a time. Each block
/// sweeps all of `short`, handing its bottom-row deltas to the next block
/// through [`CarryBits`]. Only the final block, which holds 1 to 32 units,
/// reads the score off its highest valid row, `(long.len() - 1) % 32`.
pub(crate) fn myers_x(table: &mut EqualityTable, long: &[u16], short: &[u16]) -> usize {
    debug_assert!(!short.is_empty() && short.len() <= long.len() && long.len() > WORD_BITS);

    let mut carries = CarryBits::new(short.len());
    let full_blocks = long.len().div_ceil(WORD_BITS) - 1;
    let (body, tail) = long.split_at(full_blocks * WORD_BITS);

    for block in body.chunks_exact(WORD_BITS) {
        let peq = table.load(block);
        let mut column = BlockColumn::new();
        for (i, &unit) in short.iter().enumerate() {
            column.advance(peq.mask(unit), &mut carries, i);
        }
    }

    let top = (long.len() - 1) % WORD_BITS;
    let peq = table.load(tail);
    let mut column = BlockColumn::new();
    let mut score = long.len();

    for (i, &unit) in short.iter().enumerate() {
        let (ph, mh) = column.advance(peq.mask(unit), &mut carries, i);
        score += ((ph >> top) & 1) as usize;
        score -= ((mh >> top) & 1) as usize;
    }

    score
}
