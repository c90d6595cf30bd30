//! Per-offset seed key iterators
//!
//! All iterators yield one item per offset at which the shape fits, left to
//! right, so `enumerate()` gives the seed offset.
//!
//! - [`SeedIterator`] works on a pre-reduced buffer and supports any shape.
//! - [`ContiguousSeedIterator`] rolls a gapless window over raw letters with a
//!   compile-time window length and bit width.
//! - [`HashedSeedIterator`] rolls a window over raw letters and hashes the
//!   sampled part of it.

use std::hash::Hasher;

use rustc_hash::FxHasher;

use super::reduction::{Reduction, INVALID};
use super::shape::Shape;

/// Seed keys of one shape over a reduced sequence. `None` marks offsets whose
/// window contains a masked letter.
pub struct SeedIterator<'a> {
    buf: &'a [u8],
    shape: &'a Shape,
    bits: u32,
    pos: usize,
    end: usize,
}

impl<'a> SeedIterator<'a> {
    pub fn new(buf: &'a [u8], shape: &'a Shape, bits: u32) -> Self {
        Self {
            buf,
            shape,
            bits,
            pos: 0,
            end: (buf.len() + 1).saturating_sub(shape.length()),
        }
    }
}

impl<'a> Iterator for SeedIterator<'a> {
    type Item = Option<u64>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        let key = self.shape.key(&self.buf[self.pos..], self.bits);
        self.pos += 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end.saturating_sub(self.pos);
        (n, Some(n))
    }
}

/// Rolling key of a gapless window of `L` letters packed at `B` bits each.
///
/// Produces the same keys as [`SeedIterator`] with a contiguous shape of
/// length `L`. `L * B` must stay below 64.
pub struct ContiguousSeedIterator<'a, const L: usize, const B: u32> {
    seq: &'a [u8],
    reduction: &'a Reduction,
    next: usize,
    key: u64,
    // consecutive valid letters ending at the last pushed one
    run: usize,
}

impl<'a, const L: usize, const B: u32> ContiguousSeedIterator<'a, L, B> {
    const KEY_MASK: u64 = (1u64 << (L as u32 * B)) - 1;

    pub fn new(seq: &'a [u8], reduction: &'a Reduction) -> Self {
        let mut it = Self {
            seq,
            reduction,
            next: 0,
            key: 0,
            run: 0,
        };
        while it.next < (L - 1).min(seq.len()) {
            it.push();
        }
        it
    }

    /// Window length
    pub const fn length() -> usize {
        L
    }

    #[inline]
    fn push(&mut self) {
        let r = self.reduction.reduce(self.seq[self.next]);
        self.next += 1;
        if r == INVALID {
            self.run = 0;
            self.key = (self.key << B) & Self::KEY_MASK;
        } else {
            self.run += 1;
            self.key = ((self.key << B) | r as u64) & Self::KEY_MASK;
        }
    }
}

impl<'a, const L: usize, const B: u32> Iterator for ContiguousSeedIterator<'a, L, B> {
    type Item = Option<u64>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.seq.len() {
            return None;
        }
        self.push();
        Some(if self.run >= L { Some(self.key) } else { None })
    }
}

/// Hashed keys of one (possibly spaced) shape over raw letters.
///
/// Letters are reduced on the fly; masked letters enter the window as the
/// all-ones code instead of being rejected, so every offset yields a key.
pub struct HashedSeedIterator<'a, const B: u32> {
    seq: &'a [u8],
    reduction: &'a Reduction,
    next: usize,
    window: u64,
    shape_mask: u64,
}

impl<'a, const B: u32> HashedSeedIterator<'a, B> {
    const MASKED_CODE: u64 = (1u64 << B) - 1;

    /// `shape.length() * B` must not exceed 64.
    pub fn new(seq: &'a [u8], shape: &Shape, reduction: &'a Reduction) -> Self {
        let mut it = Self {
            seq,
            reduction,
            next: 0,
            window: 0,
            shape_mask: shape.long_mask(B),
        };
        while it.next < (shape.length() - 1).min(seq.len()) {
            it.push();
        }
        it
    }

    #[inline]
    fn push(&mut self) {
        let r = self.reduction.reduce(self.seq[self.next]);
        self.next += 1;
        let code = if r == INVALID { Self::MASKED_CODE } else { r as u64 };
        self.window = (self.window << B) | code;
    }
}

impl<'a, const B: u32> Iterator for HashedSeedIterator<'a, B> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.next >= self.seq.len() {
            return None;
        }
        self.push();
        Some(hash_seed(self.window & self.shape_mask))
    }
}

#[inline]
pub fn hash_seed(packed: u64) -> u64 {
    let mut h = FxHasher::default();
    h.write_u64(packed);
    h.finish()
}
