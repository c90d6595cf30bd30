use std::cmp::Ordering;

use super::hsp::{score_compare_hsps, Hsp};

/// All HSPs of one query against one target
///
/// `hsps` is kept best-first and `filter_score` mirrors the score of the first
/// HSP (0 when there is none) after every culling step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub target_id: usize,
    pub hsps: Vec<Hsp>,
    pub filter_score: i32,
}

impl Match {
    /// Sorts `hsps` best-first and derives `filter_score` from them.
    pub fn new(target_id: usize, hsps: Vec<Hsp>) -> Self {
        let mut m = Self {
            target_id,
            hsps,
            filter_score: 0,
        };
        m.sort_hsps();
        m.update_filter_score();
        m
    }

    /// Target known only by its score bound, used by score-only culling.
    pub fn score_only(target_id: usize, filter_score: i32) -> Self {
        Self {
            target_id,
            hsps: Vec::new(),
            filter_score,
        }
    }

    pub fn sort_hsps(&mut self) {
        self.hsps.sort_by(score_compare_hsps);
    }

    pub fn update_filter_score(&mut self) {
        self.filter_score = self.hsps.first().map_or(0, |h| h.score);
    }

    pub fn best(&self) -> Option<&Hsp> {
        self.hsps.first()
    }

    pub fn is_empty(&self) -> bool {
        self.hsps.is_empty()
    }
}

/// Best-first order of targets: filter score DESC, then target id ASC.
pub fn compare_targets(a: &Match, b: &Match) -> Ordering {
    b.filter_score
        .cmp(&a.filter_score)
        .then_with(|| a.target_id.cmp(&b.target_id))
}
