//! Packed sequence collection
//!
//! All sequences share one buffer, separated by [`DELIMITER`]. The buffer
//! starts with a delimiter as well, so every sequence is preceded and followed
//! by one. `limits[i]` is the buffer offset of sequence `i`; the extra trailing
//! entry marks the end of the last sequence's delimiter.
//!
//! ```text
//! data:   | D | s0 s0 s0 | D | s1 s1 | D |
//! limits:     1            5       8
//! ```

use std::ops::{Index, Range};

use super::alphabet::DELIMITER;
use super::translated::TranslatedSequence;

/// Padding between sequences (one delimiter)
const PADDING: usize = 1;

#[derive(Debug, Clone)]
pub struct SequenceCollection {
    data: Vec<u8>,
    limits: Vec<usize>,
    translated: bool,
}

impl Default for SequenceCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceCollection {
    pub fn new() -> Self {
        Self {
            data: vec![DELIMITER; PADDING],
            limits: vec![PADDING],
            translated: false,
        }
    }

    /// Collection whose entries are six-frame translations, six consecutive
    /// entries per source nucleotide sequence (frames 0..=5 in order).
    pub fn new_translated() -> Self {
        Self {
            translated: true,
            ..Self::new()
        }
    }

    pub fn from_sequences<I, S>(seqs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut set = Self::new();
        for s in seqs {
            set.push(s.as_ref());
        }
        set
    }

    /// Append an encoded sequence.
    pub fn push(&mut self, seq: &[u8]) {
        self.data.extend_from_slice(seq);
        self.data.extend(std::iter::repeat(DELIMITER).take(PADDING));
        self.limits.push(self.data.len());
    }

    /// Number of sequences
    #[inline]
    pub fn len(&self) -> usize {
        self.limits.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_translated(&self) -> bool {
        self.translated
    }

    /// Total number of letters, delimiters excluded
    #[inline]
    pub fn letters(&self) -> usize {
        self.data.len() - PADDING - self.len() * PADDING
    }

    #[inline]
    pub fn length(&self, i: usize) -> usize {
        self.limits[i + 1] - self.limits[i] - PADDING
    }

    /// `(offset, length)` of sequence `i` inside the packed buffer
    #[inline]
    pub fn bounds(&self, i: usize) -> (usize, usize) {
        (self.limits[i], self.length(i))
    }

    #[inline]
    pub fn get(&self, i: usize) -> &[u8] {
        let (begin, len) = self.bounds(i);
        &self.data[begin..begin + len]
    }

    /// The whole packed buffer, delimiters included
    pub fn packed(&self) -> &[u8] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }

    pub fn avg_len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.letters() / self.len()
    }

    /// `(min, max)` sequence length. The minimum only considers sequences of at
    /// least `min_len` letters and is `usize::MAX` if there are none.
    pub fn len_bounds(&self, min_len: usize) -> (usize, usize) {
        // DIAMOND reference: diamond/src/data/sequence_set.h:49-58
        let mut min = usize::MAX;
        let mut max = 0;
        for i in 0..self.len() {
            let l = self.length(i);
            max = max.max(l);
            if l >= min_len {
                min = min.min(l);
            }
        }
        (min, max)
    }

    /// Longest sequence in `range`
    pub fn max_len(&self, range: Range<usize>) -> usize {
        // DIAMOND reference: diamond/src/data/sequence_set.h:60-66
        range.map(|i| self.length(i)).max().unwrap_or(0)
    }

    /// Split the collection into `n_part` index ranges of roughly equal letter
    /// count.
    ///
    /// Returns `n_part + 1` monotone boundaries starting at 0 and ending at
    /// `len()`. All but the last partition are filled greedily up to
    /// `ceil(letters / n_part)` letters, so one may overshoot by at most one
    /// sequence; the last one takes the rest. Partitions past the end of the
    /// data are empty.
    pub fn partition(&self, n_part: usize) -> Vec<usize> {
        // DIAMOND reference: diamond/src/data/sequence_set.h:68-82
        let n_part = n_part.max(1);
        let n = self.len();
        let target = self.letters().div_ceil(n_part).max(1);

        let mut bounds = Vec::with_capacity(n_part + 1);
        bounds.push(0);
        let mut i = 0;
        while i < n && bounds.len() < n_part {
            let mut filled = 0;
            while i < n && filled < target {
                filled += self.length(i);
                i += 1;
            }
            bounds.push(i);
        }
        bounds.resize(n_part + 1, n);
        bounds
    }

    /// Nucleotide length of the source sequence behind translated entry `i`.
    ///
    /// Frame 0 of a sequence of length `3l + r` has `l` letters; frame 1 also
    /// has `l` letters iff `r >= 1`, frame 2 iff `r == 2`.
    pub fn reverse_translated_len(&self, i: usize) -> usize {
        // DIAMOND reference: diamond/src/data/sequence_set.h:84-94
        let j = i - i % 6;
        let l = self.length(j);
        if self.length(j + 2) == l {
            l * 3 + 2
        } else if self.length(j + 1) == l {
            l * 3 + 1
        } else {
            l * 3
        }
    }

    /// Frame view of entry `i`. For a translated collection `i` must be the
    /// first entry of a six-frame block.
    pub fn translated_seq(&self, i: usize) -> TranslatedSequence<'_> {
        // DIAMOND reference: diamond/src/data/sequence_set.h:96-101
        if !self.translated {
            return TranslatedSequence::single(self.get(i));
        }
        TranslatedSequence::six_frames(
            [
                self.get(i),
                self.get(i + 1),
                self.get(i + 2),
                self.get(i + 3),
                self.get(i + 4),
                self.get(i + 5),
            ],
            self.reverse_translated_len(i),
        )
    }

    pub fn log_stats(&self) {
        log::info!(
            "Sequences = {}, letters = {}, average length = {}",
            self.len(),
            self.letters(),
            self.avg_len()
        );
    }
}

impl Index<usize> for SequenceCollection {
    type Output = [u8];

    fn index(&self, i: usize) -> &[u8] {
        self.get(i)
    }
}
