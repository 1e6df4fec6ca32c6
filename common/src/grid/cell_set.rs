use std::ops::BitOr;

use smallvec::{smallvec, SmallVec};

const WORD_BITS: usize = 64;

/// A fixed-capacity set of cell indexes, one bit per cell.
///
/// Boards up to 128 cells (every common k-in-a-row size) fit inline without
/// touching the heap, so cloning a set is a copy of two words.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct CellSet {
    words: SmallVec<[u64; 2]>,
}

impl CellSet {
    /// Creates an empty set able to hold indexes `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        let word_count = (capacity + WORD_BITS - 1) / WORD_BITS;
        Self {
            words: smallvec![0; word_count],
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        match self.words.get(index / WORD_BITS) {
            Some(word) => word & (1u64 << (index % WORD_BITS)) != 0,
            None => false,
        }
    }

    /// Adds `index` to the set. Returns false when the index is beyond the
    /// capacity or already present.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.words.get_mut(index / WORD_BITS) {
            Some(word) => {
                let bit = 1u64 << (index % WORD_BITS);
                let inserted = *word & bit == 0;
                *word |= bit;
                inserted
            }
            None => false,
        }
    }

    pub fn count_ones(&self) -> u32 {
        self.words.iter().map(|word| word.count_ones()).sum()
    }

    /// Iterates the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(word_index, word)| {
                BitIter(*word).map(move |bit| word_index * WORD_BITS + bit)
            })
    }
}

struct BitIter(u64);

impl Iterator for BitIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(bit)
    }
}

impl BitOr for &CellSet {
    type Output = CellSet;

    fn bitor(self, rhs: Self) -> CellSet {
        let (longer, shorter) = if self.words.len() >= rhs.words.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut words = longer.words.clone();
        for (word, other) in words.iter_mut().zip(shorter.words.iter()) {
            *word |= other;
        }
        CellSet { words }
    }
}
