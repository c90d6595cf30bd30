use std::cmp::Ordering;

use crate::sequence::{Frame, Interval, TranslatedPosition};

/// One local alignment between a query and a target
///
/// `query_range` is in the coordinates the alignment was computed in (a
/// translated frame for translated searches). `query_source_range` is the same
/// range on the source query and is filled in by envelopment culling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hsp {
    pub score: i32,
    /// Query frame index 0..6, 0 for untranslated queries
    pub frame: u8,
    pub query_range: Interval,
    pub query_source_range: Interval,
    pub subject_range: Interval,
    /// Number of identical positions
    pub identities: u32,
    /// Number of alignment columns
    pub length: u32,
}

impl Hsp {
    pub fn new(score: i32, query_range: Interval, subject_range: Interval) -> Self {
        Self {
            score,
            frame: 0,
            query_range,
            query_source_range: query_range,
            subject_range,
            identities: 0,
            length: query_range.length().max(subject_range.length()) as u32,
        }
    }

    pub fn with_frame(mut self, frame: u8) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_identities(mut self, identities: u32, length: u32) -> Self {
        self.identities = identities;
        self.length = length;
        self
    }

    pub fn id_percent(&self) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        self.identities as f64 * 100.0 / self.length as f64
    }

    pub fn query_cover_percent(&self, source_query_len: usize) -> f64 {
        if source_query_len == 0 {
            return 0.0;
        }
        self.query_source_range.length() as f64 * 100.0 / source_query_len as f64
    }

    pub fn subject_cover_percent(&self, subject_len: usize) -> f64 {
        if subject_len == 0 {
            return 0.0;
        }
        self.subject_range.length() as f64 * 100.0 / subject_len as f64
    }

    /// Set `query_source_range` from `query_range`.
    ///
    /// For translated queries the frame range is mapped back onto the forward
    /// strand of the nucleotide query; otherwise the ranges are equal.
    pub fn map_query_source(&mut self, source_query_len: i32, translated: bool) {
        self.query_source_range = if translated {
            let frame = Frame::new(self.frame);
            TranslatedPosition::absolute_interval(
                TranslatedPosition::new(self.query_range.begin, frame),
                TranslatedPosition::new(self.query_range.end, frame),
                source_query_len,
            )
        } else {
            self.query_range
        };
    }

    /// More than `overlap` (a fraction) of this HSP's query or subject extent
    /// is covered by `other`.
    pub fn is_enveloped_by(&self, other: &Hsp, overlap: f64) -> bool {
        self.query_source_range.overlap_factor(&other.query_source_range) > overlap
            || self.subject_range.overlap_factor(&other.subject_range) > overlap
    }

    pub fn is_enveloped_by_any<'h, I>(&self, others: I, overlap: f64) -> bool
    where
        I: IntoIterator<Item = &'h Hsp>,
    {
        others.into_iter().any(|h| self.is_enveloped_by(h, overlap))
    }
}

/// Best-first order of HSPs within a target.
///
/// Order: score DESC → s_begin ASC → s_end DESC → q_begin ASC → q_end DESC,
/// then the remaining fields so that distinct HSPs never compare equal.
pub fn score_compare_hsps(a: &Hsp, b: &Hsp) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.subject_range.begin.cmp(&b.subject_range.begin))
        .then_with(|| b.subject_range.end.cmp(&a.subject_range.end))
        .then_with(|| a.query_source_range.begin.cmp(&b.query_source_range.begin))
        .then_with(|| b.query_source_range.end.cmp(&a.query_source_range.end))
        .then_with(|| a.frame.cmp(&b.frame))
        .then_with(|| a.query_range.cmp(&b.query_range))
        .then_with(|| b.identities.cmp(&a.identities))
        .then_with(|| a.length.cmp(&b.length))
}
