//! Bitboard cell sets

use super::{Pos, MAX_CELLS};

/// Set of cells on a board of up to 256 cells, e.g. 16x16 or 256x1.
///
/// Uses 4 x u64 to represent 256 cells. The set is `Copy`, so every
/// recursive branch that removes cells works on its own value and sibling
/// branches never observe each other's changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitboard {
    bits: [u64; 4],
    width: u16,
    height: u16,
}

impl Bitboard {
    /// Create an empty set for a `width` x `height` board
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0 && width * height <= MAX_CELLS,
            "unsupported board size {width}x{height}"
        );
        Self {
            bits: [0; 4],
            width: width as u16,
            height: height as u16,
        }
    }

    /// Create a set containing every cell of the board
    pub fn full(width: usize, height: usize) -> Self {
        let mut set = Self::new(width, height);
        for idx in 0..width * height {
            set.bits[idx / 64] |= 1u64 << (idx % 64);
        }
        set
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width as usize
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Check whether `pos` lies on the board
    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.height()
            && (pos.col as usize) < self.width()
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.width() + pos.col as usize
    }

    #[inline]
    fn pos_at(&self, idx: usize) -> Pos {
        Pos::new((idx / self.width()) as i32, (idx % self.width()) as i32)
    }

    /// Membership test; off-board positions are never members
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        let idx = self.index(pos);
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Add a cell
    #[inline]
    pub fn insert(&mut self, pos: Pos) {
        debug_assert!(self.in_bounds(pos), "{pos} is off the board");
        let idx = self.index(pos);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Remove a cell
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        if self.in_bounds(pos) {
            let idx = self.index(pos);
            self.bits[idx / 64] &= !(1u64 << (idx % 64));
        }
    }

    /// Copy of this set without `pos`
    #[inline]
    #[must_use]
    pub fn without(mut self, pos: Pos) -> Self {
        self.remove(pos);
        self
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over members in row-major order
    pub fn iter(&self) -> BitboardIter {
        BitboardIter {
            set: *self,
            word_idx: 0,
            current: self.bits[0],
        }
    }
}

/// Iterator over the cells of a [`Bitboard`]
pub struct BitboardIter {
    set: Bitboard,
    word_idx: usize,
    current: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1; // Clear lowest bit
                return Some(self.set.pos_at(self.word_idx * 64 + bit));
            }
            self.word_idx += 1;
            if self.word_idx >= self.set.bits.len() {
                return None;
            }
            self.current = self.set.bits[self.word_idx];
        }
    }
}

impl<'a> IntoIterator for &'a Bitboard {
    type Item = Pos;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
