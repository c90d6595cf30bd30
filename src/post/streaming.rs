//! Score-bounded batch culling
//!
//! Targets arrive in batches ordered by non-increasing maximum score. Only the
//! running selection is materialized; once a batch can no longer change it,
//! the caller stops requesting batches.

use crate::align::{compare_targets, Match, ReferenceStore};

use super::culling::Culler;

impl<'a, R: ReferenceStore + ?Sized> Culler<'a, R> {
    /// Whether `batch` can still change the selection in `kept`.
    ///
    /// `kept` must be sorted best-first. `low_score` bounds the scores the
    /// selection already guarantees; a batch that cannot beat it is rejected,
    /// and so is every later batch.
    pub fn add_more_targets(&self, kept: &[Match], batch: &[Match], low_score: i32) -> bool {
        // DIAMOND reference: diamond/src/align/culling.cpp:58-76
        let (best, worst) = match (kept.first(), kept.last()) {
            (Some(best), Some(worst)) => (best.filter_score, worst.filter_score),
            _ => return true,
        };
        let max_score = batch.iter().map(|t| t.filter_score).fold(0, i32::max);
        if max_score <= low_score {
            return false;
        }

        let config = self.config;
        if config.is_fixed_count() {
            kept.len() < config.max_alignments || config.has_quality_filters() || max_score >= worst
        } else {
            max_score >= config.toppercent_cutoff(best)
        }
    }

    /// Merge `batch` into `kept` if it is admitted, then re-rank and trim.
    ///
    /// Returns `true` while further batches may still matter. In fixed-count
    /// mode with identity or coverage filters active the list is not trimmed,
    /// since later filtering can still remove the best targets.
    pub fn score_only_cull(&self, kept: &mut Vec<Match>, batch: &[Match], low_score: i32) -> bool {
        // DIAMOND reference: diamond/src/align/culling.cpp:78-106
        let more = self.add_more_targets(kept, batch, low_score);
        if more {
            kept.extend_from_slice(batch);
        }

        kept.sort_by(compare_targets);
        if kept.first().map_or(true, |t| t.filter_score == 0) {
            kept.clear();
            return false;
        }

        if self.config.is_fixed_count() && self.config.has_quality_filters() {
            return true;
        }

        let end = self.selection_end(kept);
        kept.truncate(end);
        log::trace!(
            "batch of {} {}, {} targets kept",
            batch.len(),
            if more { "admitted" } else { "rejected" },
            kept.len()
        );
        more
    }
}
