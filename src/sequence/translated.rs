//! Reading frames and the mapping from frame coordinates back to the source
//! nucleotide sequence.
//!
//! A nucleotide sequence of length `n` has six translations. Frames 0..=2 read
//! the forward strand starting at offset 0, 1, 2; frames 3..=5 read the reverse
//! complement with the same offsets. Alignments are computed in frame
//! coordinates (amino acid positions) but reported on the source strand.

use super::interval::Interval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

/// One of the six reading frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    pub offset: u8,
    pub strand: Strand,
}

impl Frame {
    /// Frame from its index 0..6. Indices past 5 wrap around.
    pub fn new(index: u8) -> Self {
        let index = index % 6;
        Self {
            offset: index % 3,
            strand: if index < 3 { Strand::Forward } else { Strand::Reverse },
        }
    }

    pub fn index(&self) -> u8 {
        match self.strand {
            Strand::Forward => self.offset,
            Strand::Reverse => self.offset + 3,
        }
    }
}

/// A position inside one translated frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatedPosition {
    pub translated: i32,
    pub frame: Frame,
}

impl TranslatedPosition {
    pub fn new(translated: i32, frame: Frame) -> Self {
        Self { translated, frame }
    }

    /// Position of the codon start on the frame's own strand
    #[inline]
    pub fn in_strand(&self) -> i32 {
        self.translated * 3 + self.frame.offset as i32
    }

    /// Position on the forward strand of a source sequence of length `dna_len`
    #[inline]
    pub fn absolute(&self, dna_len: i32) -> i32 {
        match self.frame.strand {
            Strand::Forward => self.in_strand(),
            Strand::Reverse => dna_len - 1 - self.in_strand(),
        }
    }

    /// Source interval covered by the frame range `[begin, end)`.
    ///
    /// On the reverse strand the endpoints swap roles, so the interval is
    /// `(end.absolute, begin.absolute]` shifted to half-open form.
    pub fn absolute_interval(begin: TranslatedPosition, end: TranslatedPosition, dna_len: i32) -> Interval {
        // DIAMOND reference: diamond/src/align/culling.cpp:34
        match begin.frame.strand {
            Strand::Forward => Interval::new(begin.absolute(dna_len), end.absolute(dna_len)),
            Strand::Reverse => Interval::new(end.absolute(dna_len) + 1, begin.absolute(dna_len) + 1),
        }
    }
}

/// View over the translations of one source sequence.
///
/// Untranslated collections yield a view with a single frame.
#[derive(Debug, Clone, Copy)]
pub struct TranslatedSequence<'a> {
    frames: [&'a [u8]; 6],
    frame_count: usize,
    source_len: usize,
}

impl<'a> TranslatedSequence<'a> {
    pub fn single(seq: &'a [u8]) -> Self {
        Self {
            frames: [seq, &[], &[], &[], &[], &[]],
            frame_count: 1,
            source_len: seq.len(),
        }
    }

    pub fn six_frames(frames: [&'a [u8]; 6], source_len: usize) -> Self {
        Self {
            frames,
            frame_count: 6,
            source_len,
        }
    }

    pub fn frame(&self, frame: Frame) -> &'a [u8] {
        self.frames[frame.index() as usize]
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn is_translated(&self) -> bool {
        self.frame_count == 6
    }

    /// Length of the underlying (nucleotide) sequence
    pub fn source_len(&self) -> usize {
        self.source_len
    }
}
