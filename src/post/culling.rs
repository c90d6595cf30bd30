//! Per-query hit culling
//!
//! Three steps, all in place on caller-owned data:
//!
//! 1. [`Culler::inner_cull`] - per target: map query ranges to source
//!    coordinates, sort best-first, drop HSPs enveloped by a better one, cap
//!    the HSP count.
//! 2. [`Culler::apply_filters`] - per target: identity/coverage thresholds and
//!    self-hit suppression.
//! 3. [`Culler::cull_targets`] - across targets: top-percent or fixed-count
//!    selection.
//!
//! The streaming variant for score-bounded batches lives in `streaming`.

use crate::align::{compare_targets, Hsp, Match, ReferenceStore};
use crate::config::CullingConfig;

pub struct Culler<'a, R: ReferenceStore + ?Sized> {
    pub(crate) config: &'a CullingConfig,
    refs: &'a R,
}

impl<'a, R: ReferenceStore + ?Sized> Culler<'a, R> {
    pub fn new(config: &'a CullingConfig, refs: &'a R) -> Self {
        Self { config, refs }
    }

    pub fn config(&self) -> &CullingConfig {
        self.config
    }

    /// Remove HSPs that largely duplicate a better HSP of the same target.
    ///
    /// HSPs are visited best-first and each one is only compared against those
    /// already kept, so the outcome depends on the order and a dropped HSP
    /// never shields a later one.
    pub fn inner_cull(&self, m: &mut Match, source_query_len: usize) {
        // DIAMOND reference: diamond/src/align/culling.cpp:31-47
        let qlen = source_query_len as i32;
        for h in &mut m.hsps {
            h.map_query_source(qlen, self.config.query_translated);
        }
        m.sort_hsps();
        m.update_filter_score();

        let overlap = self.config.inner_culling_overlap / 100.0;
        let mut kept: Vec<Hsp> = Vec::with_capacity(m.hsps.len());
        for h in m.hsps.drain(..) {
            if !h.is_enveloped_by_any(&kept, overlap) {
                kept.push(h);
            }
        }
        m.hsps = kept;

        if self.config.max_hsps > 0 {
            self.max_hsp_culling(m);
        }
    }

    /// Keep the `max_hsps` best HSPs.
    pub fn max_hsp_culling(&self, m: &mut Match) {
        // DIAMOND reference: diamond/src/align/culling.cpp:49-56
        if self.config.max_hsps > 0 && m.hsps.len() > self.config.max_hsps {
            m.hsps.truncate(self.config.max_hsps);
        }
    }

    /// Drop HSPs failing the identity and coverage thresholds, and perfect
    /// full-length hits of the query against itself when `no_self_hits` is set.
    pub fn apply_filters(&self, m: &mut Match, source_query_len: usize, query_title: &str) {
        // DIAMOND reference: diamond/src/align/culling.cpp:108-126
        let config = self.config;
        let title = self.refs.title(m.target_id);
        let len = self.refs.length(m.target_id);

        m.hsps.retain(|h| {
            let self_hit = config.no_self_hits
                && h.identities == h.length
                && h.query_source_range.length() as usize == source_query_len
                && h.subject_range.length() as usize == len
                && query_title == title;
            !(h.id_percent() < config.min_id
                || h.query_cover_percent(source_query_len) < config.query_cover
                || h.subject_cover_percent(len) < config.subject_cover
                || self_hit)
        });
        m.update_filter_score();
    }

    /// Filter every target, rank them and keep the reported prefix.
    ///
    /// Clears the list when no target has a positive score.
    pub fn cull_targets(&self, targets: &mut Vec<Match>, source_query_len: usize, query_title: &str) {
        // DIAMOND reference: diamond/src/align/culling.cpp:128-148
        for m in targets.iter_mut() {
            self.apply_filters(m, source_query_len, query_title);
        }
        targets.sort_by(compare_targets);
        if targets.first().map_or(true, |t| t.filter_score == 0) {
            targets.clear();
            return;
        }
        let end = self.selection_end(targets);
        targets.truncate(end);
    }

    /// [`inner_cull`](Self::inner_cull) every target, then
    /// [`cull_targets`](Self::cull_targets).
    pub fn cull_query(&self, targets: &mut Vec<Match>, source_query_len: usize, query_title: &str) {
        let before = targets.len();
        for m in targets.iter_mut() {
            self.inner_cull(m, source_query_len);
        }
        self.cull_targets(targets, source_query_len, query_title);
        log::trace!(
            "{}: kept {} of {} targets",
            query_title,
            targets.len(),
            before
        );
    }

    /// Length of the reported prefix of a sorted, non-empty target list whose
    /// best score is positive.
    ///
    /// Top-percent mode keeps every target scoring at least
    /// `max(floor((1 - toppercent/100) * best), 1)`. Fixed-count mode takes the
    /// first `max_alignments` targets and backs off a trailing run of zero
    /// scores; the window is not refilled afterwards.
    pub(crate) fn selection_end(&self, targets: &[Match]) -> usize {
        let best = targets[0].filter_score;
        if !self.config.is_fixed_count() {
            let cutoff = self.config.toppercent_cutoff(best).max(1);
            return targets.iter().take_while(|t| t.filter_score >= cutoff).count();
        }
        let mut end = self.config.max_alignments.min(targets.len());
        while end > 1 && targets[end - 1].filter_score == 0 {
            end -= 1;
        }
        end
    }
}
