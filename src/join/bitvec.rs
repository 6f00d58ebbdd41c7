//! Candidate bit-vector
//!
//! The sweep phase marks rows as live join candidates and repeatedly asks
//! for the next live candidate at or after a position. Bits are only ever
//! set within one join call ("this candidate has become eligible" cannot
//! become false again during a monotone sweep), so the structure needs
//! only O(1) `set` and a word-at-a-time forward scan.

const WORD_BITS: usize = 64;

/// Fixed-size bit-vector over `u64` words.
#[derive(Debug, Clone)]
pub struct BitVec {
    words: Vec<u64>,
    len: usize,
}

impl BitVec {
    /// Creates a bit-vector of `len` bits, all clear.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Returns the number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the bit-vector has no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the bit at `index`.
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
    }

    /// Returns the bit at `index`.
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// Returns the position of the first set bit at or after `from`,
    /// or `None` if no bit is set in that range.
    pub fn first_set_from(&self, from: usize) -> Option<usize> {
        if from >= self.len {
            return None;
        }

        let mut word_index = from / WORD_BITS;
        // Mask off bits below `from` in the first word
        let mut word = self.words[word_index] & (u64::MAX << (from % WORD_BITS));

        loop {
            if word != 0 {
                let position = word_index * WORD_BITS + word.trailing_zeros() as usize;
                // Trailing words may carry bits past `len`; they are
                // never set, but guard anyway
                return (position < self.len).then_some(position);
            }
            word_index += 1;
            if word_index >= self.words.len() {
                return None;
            }
            word = self.words[word_index];
        }
    }
}
